//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the monitor and the outside world. Adapters
//! under `adapter::outbound` implement them.

pub mod outbound;
