//! Trade events and the raw records they are validated from.
//!
//! A source hands the monitor [`TradeRecord`]s, whose fields may be missing.
//! Only records carrying all four fields become [`TradeEvent`]s:
//!
//! ```
//! use cancelwatch::domain::id::CompanyId;
//! use cancelwatch::domain::trade::{TradeKind, TradeRecord};
//! use rust_decimal_macros::dec;
//!
//! let complete = TradeRecord {
//!     timestamp: Some(1_424_000_000),
//!     company: Some(CompanyId::new("Acme")),
//!     kind: Some(TradeKind::Cancel),
//!     amount: Some(dec!(250)),
//! };
//! assert!(complete.clone().validate().is_some());
//!
//! let missing_amount = TradeRecord { amount: None, ..complete };
//! assert!(missing_amount.validate().is_none());
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::CompanyId;

/// Which side of the cancellation ratio a trade's volume counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    /// Volume added to the purchased total (the ratio's complement).
    Purchase,
    /// Volume added to the cancelled total (the ratio's numerator).
    Cancel,
    /// Any other transaction type. The event occupies the window but its
    /// volume counts towards neither total.
    Other,
}

/// A validated trade event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeEvent {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub company: CompanyId,
    pub kind: TradeKind,
    /// Traded volume, never negative.
    pub amount: Decimal,
}

impl TradeEvent {
    pub fn new(
        timestamp: i64,
        company: impl Into<CompanyId>,
        kind: TradeKind,
        amount: Decimal,
    ) -> Self {
        Self {
            timestamp,
            company: company.into(),
            kind,
            amount,
        }
    }
}

/// A trade as delivered by a source, before validation.
///
/// Any field the source could not obtain is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeRecord {
    pub timestamp: Option<i64>,
    pub company: Option<CompanyId>,
    pub kind: Option<TradeKind>,
    pub amount: Option<Decimal>,
}

impl TradeRecord {
    /// Company named by the record, if any.
    #[must_use]
    pub fn company(&self) -> Option<&CompanyId> {
        self.company.as_ref()
    }

    /// Promote the record to an event when every field is present.
    #[must_use]
    pub fn validate(self) -> Option<TradeEvent> {
        Some(TradeEvent {
            timestamp: self.timestamp?,
            company: self.company?,
            kind: self.kind?,
            amount: self.amount?,
        })
    }
}

impl From<TradeEvent> for TradeRecord {
    fn from(event: TradeEvent) -> Self {
        Self {
            timestamp: Some(event.timestamp),
            company: Some(event.company),
            kind: Some(event.kind),
            amount: Some(event.amount),
        }
    }
}
