//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod output;
