//! Headerless CSV trade files.

pub mod settings;
pub mod source;
