//! CSV trade source configuration.

use serde::{Deserialize, Serialize};

use crate::domain::trade::TradeKind;
use crate::error::{ConfigError, Result};

/// Mapping from the file's transaction-type codes to trade kinds.
///
/// By default rows coded `F` count towards cancelled volume and rows coded
/// `D` towards purchased volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvSourceConfig {
    /// Code whose amounts are summed into cancelled volume.
    #[serde(default = "default_cancel_code")]
    pub cancel_code: String,
    /// Code whose amounts are summed into purchased volume.
    #[serde(default = "default_purchase_code")]
    pub purchase_code: String,
}

fn default_cancel_code() -> String {
    "F".into()
}

fn default_purchase_code() -> String {
    "D".into()
}

impl Default for CsvSourceConfig {
    fn default() -> Self {
        Self {
            cancel_code: default_cancel_code(),
            purchase_code: default_purchase_code(),
        }
    }
}

impl CsvSourceConfig {
    /// Map a raw type code to a trade kind.
    ///
    /// Codes matching neither setting map to [`TradeKind::Other`]; only an
    /// empty code is absent.
    #[must_use]
    pub fn kind_for(&self, code: &str) -> Option<TradeKind> {
        if code.is_empty() {
            None
        } else if code == self.cancel_code {
            Some(TradeKind::Cancel)
        } else if code == self.purchase_code {
            Some(TradeKind::Purchase)
        } else {
            Some(TradeKind::Other)
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.cancel_code.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cancel_code",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if self.purchase_code.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "purchase_code",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if self.cancel_code == self.purchase_code {
            return Err(ConfigError::InvalidValue {
                field: "purchase_code",
                reason: format!("must differ from cancel_code ({})", self.cancel_code),
            }
            .into());
        }
        Ok(())
    }
}
