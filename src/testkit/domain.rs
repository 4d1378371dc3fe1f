//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`TradeRecord`] and [`CompanyId`]
//! so tests focus on assertions rather than construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::id::CompanyId;
use crate::domain::trade::{TradeEvent, TradeKind, TradeRecord};

/// Create a [`CompanyId`] from a string.
pub fn company(id: &str) -> CompanyId {
    CompanyId::from(id)
}

/// A complete cancel record.
pub fn cancel(timestamp: i64, company: &str, amount: Decimal) -> TradeRecord {
    TradeEvent::new(timestamp, company, TradeKind::Cancel, amount).into()
}

/// A complete purchase record.
pub fn purchase(timestamp: i64, company: &str, amount: Decimal) -> TradeRecord {
    TradeEvent::new(timestamp, company, TradeKind::Purchase, amount).into()
}

/// A cancel record with its amount missing.
pub fn incomplete(timestamp: i64, company: &str) -> TradeRecord {
    TradeRecord {
        amount: None,
        ..cancel(timestamp, company, Decimal::ONE)
    }
}

/// Generate `n` companies named `c0`, `c1`, ..., `c{n-1}`.
pub fn make_companies(n: usize) -> Vec<CompanyId> {
    (0..n).map(|i| CompanyId::from(format!("c{i}"))).collect()
}
