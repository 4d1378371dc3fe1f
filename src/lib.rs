//! Cancelwatch - detection of companies with excessive trade cancellations.
//!
//! The crate flags companies whose cancelled volume, measured over a
//! trailing time window, reaches a fixed share of their total traded volume.
//! Once flagged, a company stays flagged for the rest of the run.
//!
//! # Architecture
//!
//! - **`domain`** - Trades, per-company trailing windows, and the
//!   [`CancellationMonitor`](domain::monitor::CancellationMonitor) latch
//! - **`port`** - The [`TradeSource`](port::outbound::source::TradeSource) seam
//! - **`adapter`** - CSV and in-memory sources, and the CLI
//! - **`application`** - Run-to-completion
//!   [`CancellationChecker`](application::checker::CancellationChecker)
//! - **`infrastructure`** - TOML configuration and logging setup
//!
//! # Example
//!
//! ```
//! use cancelwatch::adapter::outbound::memory::MemoryTradeSource;
//! use cancelwatch::application::checker::CancellationChecker;
//! use cancelwatch::domain::monitor::MonitorConfig;
//! use cancelwatch::domain::trade::{TradeEvent, TradeKind};
//! use rust_decimal_macros::dec;
//!
//! let source = MemoryTradeSource::from_events([
//!     TradeEvent::new(0, "Acme", TradeKind::Cancel, dec!(40)),
//!     TradeEvent::new(30, "Acme", TradeKind::Purchase, dec!(60)),
//!     TradeEvent::new(30, "Globex", TradeKind::Purchase, dec!(10)),
//! ]);
//! let mut checker = CancellationChecker::new(source, MonitorConfig::default());
//!
//! let offenders = checker.companies_involved_in_excessive_cancellations().unwrap();
//! assert_eq!(offenders.len(), 1);
//! assert_eq!(checker.total_number_of_well_behaved_companies().unwrap(), 1);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
