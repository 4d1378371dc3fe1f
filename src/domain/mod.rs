//! Core domain logic: trades, trailing windows, and the
//! excessive-cancellation monitor. Depends on nothing outside this module.

pub mod id;
pub mod monitor;
pub mod trade;
pub mod window;
