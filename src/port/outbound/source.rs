//! Trade source port.

use crate::domain::trade::TradeRecord;
use crate::error::Result;

/// Supplies one run's worth of trade records in arrival order.
///
/// Records are handed over unvalidated; the monitor filters incomplete ones.
/// A source either yields its full sequence or fails before any record is
/// ingested, so a failed load never leaves partial results behind.
pub trait TradeSource {
    /// Load every record for a run.
    fn load(&self) -> Result<Vec<TradeRecord>>;
}

impl<S: TradeSource + ?Sized> TradeSource for &S {
    fn load(&self) -> Result<Vec<TradeRecord>> {
        (**self).load()
    }
}

