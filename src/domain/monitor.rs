//! Excessive-cancellation monitor.
//!
//! [`CancellationMonitor`] keeps one [`CompanyWindow`] per company and
//! latches a company as an offender the first time its windowed cancellation
//! ratio reaches the configured threshold. A company moves through
//! `Unseen -> Tracked -> Offending`; `Offending` is absorbing for the run.
//!
//! ```
//! use cancelwatch::domain::monitor::{CancellationMonitor, MonitorConfig};
//! use cancelwatch::domain::trade::{TradeEvent, TradeKind};
//! use rust_decimal_macros::dec;
//!
//! let mut monitor = CancellationMonitor::new(MonitorConfig::default());
//! monitor.ingest(TradeEvent::new(0, "X", TradeKind::Cancel, dec!(40)).into());
//! monitor.ingest(TradeEvent::new(10, "X", TradeKind::Purchase, dec!(60)).into());
//!
//! assert_eq!(monitor.offenders().len(), 1);
//! assert_eq!(monitor.well_behaved_count(), 0);
//! ```

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::id::CompanyId;
use super::trade::{TradeEvent, TradeRecord};
use super::window::CompanyWindow;

/// Configuration for the cancellation monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Trailing window length in seconds; the lower bound is inclusive.
    #[serde(default = "default_window_secs")]
    pub window_secs: i64,

    /// Cancellation ratio at or above which a company is flagged.
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,
}

const fn default_window_secs() -> i64 {
    60
}

fn default_threshold() -> Decimal {
    dec!(0.33)
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            threshold: default_threshold(),
        }
    }
}

/// Where a company stands in the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Unseen,
    Tracked,
    Offending,
}

/// Why a record was discarded without touching any window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// One or more of the four fields was missing.
    Incomplete,
    /// The company is already latched as an offender.
    AlreadyOffending,
}

/// Outcome of a single [`CancellationMonitor::ingest`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingest {
    Dropped(DropReason),
    /// First event for the company; its window was opened without a ratio check.
    Opened(CompanyId),
    /// Window updated; ratio stayed below the threshold (or was undefined).
    Tracked {
        company: CompanyId,
        ratio: Option<Decimal>,
    },
    /// Window updated and the company was latched as an offender.
    Flagged { company: CompanyId, ratio: Decimal },
}

/// Point-in-time view of a run's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub offenders: Vec<CompanyId>,
    pub well_behaved: usize,
    pub companies_tracked: usize,
    pub records_ingested: usize,
    pub records_dropped: usize,
}

/// Per-company windowed cancellation tally with a one-way offender latch.
#[derive(Debug, Clone, Default)]
pub struct CancellationMonitor {
    config: MonitorConfig,
    windows: HashMap<CompanyId, CompanyWindow>,
    offenders: Vec<CompanyId>,
    offender_set: HashSet<CompanyId>,
    records_ingested: usize,
    records_dropped: usize,
}

impl CancellationMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Clear every window, the offender set and the record counters.
    pub fn reset(&mut self) {
        self.windows.clear();
        self.offenders.clear();
        self.offender_set.clear();
        self.records_ingested = 0;
        self.records_dropped = 0;
    }

    /// Feed one record through the window and latch logic.
    pub fn ingest(&mut self, record: TradeRecord) -> Ingest {
        self.records_ingested += 1;

        if record.company().is_some_and(|c| self.offender_set.contains(c)) {
            self.records_dropped += 1;
            return Ingest::Dropped(DropReason::AlreadyOffending);
        }

        let Some(event) = record.validate() else {
            self.records_dropped += 1;
            return Ingest::Dropped(DropReason::Incomplete);
        };

        let Some(window) = self.windows.get_mut(&event.company) else {
            let company = event.company.clone();
            self.windows
                .insert(company.clone(), CompanyWindow::new(event));
            return Ingest::Opened(company);
        };

        let company = event.company.clone();
        window.insert(event, self.config.window_secs);

        match window.cancellation_ratio() {
            Some(ratio) if ratio >= self.config.threshold => {
                self.offender_set.insert(company.clone());
                self.offenders.push(company.clone());
                Ingest::Flagged { company, ratio }
            }
            ratio => Ingest::Tracked { company, ratio },
        }
    }

    /// Ingest a validated event directly.
    pub fn ingest_event(&mut self, event: TradeEvent) -> Ingest {
        self.ingest(event.into())
    }

    /// Offenders in the order they were flagged.
    #[must_use]
    pub fn offenders(&self) -> &[CompanyId] {
        &self.offenders
    }

    #[must_use]
    pub fn is_offender(&self, company: &CompanyId) -> bool {
        self.offender_set.contains(company)
    }

    /// Companies with at least one valid event that were never flagged.
    #[must_use]
    pub fn well_behaved_count(&self) -> usize {
        self.windows
            .keys()
            .filter(|company| !self.offender_set.contains(*company))
            .count()
    }

    /// Number of companies that have produced at least one valid event.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn status(&self, company: &CompanyId) -> CompanyStatus {
        if self.offender_set.contains(company) {
            CompanyStatus::Offending
        } else if self.windows.contains_key(company) {
            CompanyStatus::Tracked
        } else {
            CompanyStatus::Unseen
        }
    }

    #[must_use]
    pub fn window(&self, company: &CompanyId) -> Option<&CompanyWindow> {
        self.windows.get(company)
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            offenders: self.offenders.clone(),
            well_behaved: self.well_behaved_count(),
            companies_tracked: self.tracked_count(),
            records_ingested: self.records_ingested,
            records_dropped: self.records_dropped,
        }
    }
}
