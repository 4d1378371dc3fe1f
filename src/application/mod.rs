//! Application services: orchestrate domain logic over ports.

pub mod checker;
