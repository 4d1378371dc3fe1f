//! Outbound adapters (driven side).

pub mod csv;
pub mod memory;
