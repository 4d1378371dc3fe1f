//! In-memory trade source for streaming callers and tests.

use crate::domain::trade::{TradeEvent, TradeRecord};
use crate::error::Result;
use crate::port::outbound::source::TradeSource;

/// Trade source backed by a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct MemoryTradeSource {
    records: Vec<TradeRecord>,
}

impl MemoryTradeSource {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    /// Build a source from already-validated events.
    pub fn from_events(events: impl IntoIterator<Item = TradeEvent>) -> Self {
        Self::new(events.into_iter().map(TradeRecord::from).collect())
    }

    pub fn push(&mut self, record: TradeRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TradeSource for MemoryTradeSource {
    fn load(&self) -> Result<Vec<TradeRecord>> {
        Ok(self.records.clone())
    }
}

impl FromIterator<TradeRecord> for MemoryTradeSource {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
