//! Run-to-completion excessive-cancellation checks.
//!
//! [`CancellationChecker`] binds one [`TradeSource`] to one
//! [`CancellationMonitor`]. Every query is a full pass: the monitor is reset,
//! the source is loaded, and every record is ingested in order. A source
//! failure surfaces before the first record is ingested, so a failed run
//! never exposes partial results.

use tracing::{debug, info, trace};

use crate::domain::id::CompanyId;
use crate::domain::monitor::{CancellationMonitor, Ingest, MonitorConfig, RunSummary};
use crate::error::Result;
use crate::port::outbound::source::TradeSource;

pub struct CancellationChecker<S> {
    source: S,
    monitor: CancellationMonitor,
}

impl<S: TradeSource> CancellationChecker<S> {
    pub fn new(source: S, config: MonitorConfig) -> Self {
        Self {
            source,
            monitor: CancellationMonitor::new(config),
        }
    }

    /// Reset the monitor and ingest the source's full record sequence.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.monitor.reset();

        let records = self.source.load()?;
        debug!(records = records.len(), "Starting cancellation run");

        for record in records {
            match self.monitor.ingest(record) {
                Ingest::Flagged { company, ratio } => {
                    debug!(
                        company = %company,
                        %ratio,
                        "Company flagged for excessive cancellations"
                    );
                }
                Ingest::Dropped(reason) => {
                    trace!(?reason, "Record dropped");
                }
                Ingest::Opened(_) | Ingest::Tracked { .. } => {}
            }
        }

        let summary = self.monitor.summary();
        info!(
            offenders = summary.offenders.len(),
            well_behaved = summary.well_behaved,
            records = summary.records_ingested,
            dropped = summary.records_dropped,
            "Cancellation run complete"
        );
        Ok(summary)
    }

    /// Companies involved in excessive cancelling, in the order they were flagged.
    pub fn companies_involved_in_excessive_cancellations(&mut self) -> Result<Vec<CompanyId>> {
        Ok(self.run()?.offenders)
    }

    /// Number of companies never involved in excessive cancelling.
    pub fn total_number_of_well_behaved_companies(&mut self) -> Result<usize> {
        Ok(self.run()?.well_behaved)
    }

    #[must_use]
    pub fn monitor(&self) -> &CancellationMonitor {
        &self.monitor
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
