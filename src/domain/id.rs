//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

/// Company identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Create a new CompanyId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the company ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CompanyId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CompanyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
