//! Infrastructure: configuration loading and process-level setup.

pub mod config;
