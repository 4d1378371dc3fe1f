//! Behavioural tests for the cancellation monitor.

use cancelwatch::domain::monitor::{CancellationMonitor, CompanyStatus, MonitorConfig};
use cancelwatch::domain::trade::TradeRecord;
use cancelwatch::testkit::domain::{cancel, company, incomplete, make_companies, purchase};
use rust_decimal_macros::dec;

fn monitor() -> CancellationMonitor {
    CancellationMonitor::new(MonitorConfig::default())
}

fn ingest_all(monitor: &mut CancellationMonitor, records: &[TradeRecord]) {
    for record in records {
        monitor.ingest(record.clone());
    }
}

#[test]
fn single_cancel_event_is_never_flagged() {
    let mut monitor = monitor();
    monitor.ingest(cancel(0, "A", dec!(100)));

    assert!(monitor.offenders().is_empty());
    assert_eq!(monitor.well_behaved_count(), 1);
}

#[test]
fn cancel_then_purchase_within_window_flags() {
    let mut monitor = monitor();
    monitor.ingest(cancel(0, "X", dec!(40)));
    monitor.ingest(purchase(59, "X", dec!(60)));

    assert_eq!(monitor.offenders(), &[company("X")]);
    assert_eq!(monitor.well_behaved_count(), 0);
}

#[test]
fn cancel_evicted_before_ratio_check_is_ignored() {
    let mut monitor = monitor();
    monitor.ingest(cancel(0, "Y", dec!(10)));
    monitor.ingest(purchase(120, "Y", dec!(5)));

    assert!(monitor.offenders().is_empty());
    assert_eq!(monitor.well_behaved_count(), 1);
}

#[test]
fn offenders_and_well_behaved_partition_companies() {
    let mut monitor = monitor();
    ingest_all(
        &mut monitor,
        &[
            cancel(0, "bad", dec!(50)),
            purchase(0, "good", dec!(50)),
            purchase(10, "bad", dec!(50)),
            purchase(10, "good", dec!(50)),
        ],
    );

    assert_eq!(monitor.offenders(), &[company("bad")]);
    assert_eq!(monitor.well_behaved_count(), 1);
}

#[test]
fn zero_volume_company_is_well_behaved() {
    let mut monitor = monitor();
    monitor.ingest(purchase(0, "Z", dec!(0)));
    monitor.ingest(purchase(1, "Z", dec!(0)));

    assert!(monitor.offenders().is_empty());
    assert_eq!(monitor.status(&company("Z")), CompanyStatus::Tracked);
    assert_eq!(monitor.well_behaved_count(), 1);
}

#[test]
fn window_lower_bound_is_inclusive() {
    let mut kept = monitor();
    kept.ingest(cancel(0, "K", dec!(50)));
    kept.ingest(purchase(60, "K", dec!(50)));
    assert!(kept.is_offender(&company("K")));

    let mut evicted = monitor();
    evicted.ingest(cancel(0, "E", dec!(50)));
    evicted.ingest(purchase(61, "E", dec!(50)));
    assert!(!evicted.is_offender(&company("E")));
}

#[test]
fn retained_events_always_fall_inside_window() {
    let mut monitor = monitor();
    let timestamps = [0, 15, 30, 44, 61, 75, 90, 140, 141, 200, 260, 261];
    for ts in timestamps {
        monitor.ingest(purchase(ts, "W", dec!(1)));
        let window = monitor.window(&company("W")).unwrap();
        assert!(
            window.iter().all(|e| e.timestamp >= ts - 60),
            "stale event retained after ingesting {ts}"
        );
    }
}

#[test]
fn offender_latch_is_absorbing() {
    let mut monitor = monitor();
    monitor.ingest(cancel(0, "X", dec!(10)));
    monitor.ingest(cancel(1, "X", dec!(10)));
    assert_eq!(monitor.status(&company("X")), CompanyStatus::Offending);

    let frozen = monitor.window(&company("X")).unwrap().len();
    for ts in 2..200 {
        monitor.ingest(purchase(ts, "X", dec!(1000)));
    }

    assert_eq!(monitor.status(&company("X")), CompanyStatus::Offending);
    assert_eq!(monitor.window(&company("X")).unwrap().len(), frozen);
    assert_eq!(monitor.offenders().len(), 1);
}

#[test]
fn incomplete_records_never_change_results() {
    let clean = [
        purchase(0, "A", dec!(70)),
        cancel(5, "A", dec!(20)),
        purchase(5, "B", dec!(1)),
    ];
    let noisy = [
        incomplete(0, "A"),
        purchase(0, "A", dec!(70)),
        incomplete(1, "B"),
        TradeRecord::default(),
        cancel(5, "A", dec!(20)),
        incomplete(3, "C"),
        purchase(5, "B", dec!(1)),
    ];

    let mut a = monitor();
    ingest_all(&mut a, &clean);
    let mut b = monitor();
    ingest_all(&mut b, &noisy);

    assert_eq!(a.offenders(), b.offenders());
    assert_eq!(a.well_behaved_count(), b.well_behaved_count());
    assert_eq!(b.status(&company("C")), CompanyStatus::Unseen);
    assert_eq!(
        a.window(&company("A")).unwrap().len(),
        b.window(&company("A")).unwrap().len()
    );
}

#[test]
fn reset_then_replay_is_idempotent() {
    let records = [
        cancel(0, "X", dec!(40)),
        purchase(1, "Y", dec!(1)),
        purchase(2, "X", dec!(60)),
        cancel(3, "Y", dec!(1)),
        purchase(100, "Z", dec!(5)),
    ];

    let mut monitor = monitor();
    ingest_all(&mut monitor, &records);
    let first = monitor.summary();

    monitor.reset();
    ingest_all(&mut monitor, &records);
    let second = monitor.summary();

    assert_eq!(first, second);
    assert_eq!(
        first.offenders,
        vec![company("X"), company("Y")],
        "Y reaches 1/2 on its second event"
    );
}

#[test]
fn many_companies_are_tracked_independently() {
    let mut monitor = monitor();
    let companies = make_companies(50);

    for (i, id) in companies.iter().enumerate() {
        monitor.ingest(purchase(0, id.as_str(), dec!(100)));
        if i % 5 == 0 {
            monitor.ingest(cancel(1, id.as_str(), dec!(100)));
        } else {
            monitor.ingest(cancel(1, id.as_str(), dec!(1)));
        }
    }

    assert_eq!(monitor.offenders().len(), 10);
    assert_eq!(monitor.well_behaved_count(), 40);
    assert_eq!(monitor.tracked_count(), 50);
}
