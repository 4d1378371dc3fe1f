//! CSV file trade source.
//!
//! Files carry no header row; each line is `dateTime,company,type,amount`.
//! A line is turned into a [`TradeRecord`] field by field: a field that is
//! empty or cannot be parsed becomes `None`, and a line without exactly four
//! columns yields an empty record. Rejecting those records is the monitor's
//! job, so a bad row never aborts a run. A type code matching neither
//! configured code is still a valid
//! [`TradeKind::Other`](crate::domain::trade::TradeKind::Other) row.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::debug;

use super::settings::CsvSourceConfig;
use crate::domain::id::CompanyId;
use crate::domain::trade::TradeRecord;
use crate::error::{Result, SourceError};
use crate::port::outbound::source::TradeSource;

const COLUMNS: usize = 4;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reads trade records from a headerless CSV file.
#[derive(Debug, Clone)]
pub struct CsvTradeSource {
    path: PathBuf,
    config: CsvSourceConfig,
}

impl CsvTradeSource {
    pub fn new(path: impl Into<PathBuf>, config: CsvSourceConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse CSV text into records, one per non-blank line.
    #[must_use]
    pub fn parse_str(&self, content: &str) -> Vec<TradeRecord> {
        content
            .trim_start_matches('\u{feff}')
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse_line(line))
            .collect()
    }

    /// Parse a single line into a record.
    #[must_use]
    pub fn parse_line(&self, line: &str) -> TradeRecord {
        let fields = split_fields(line);
        if fields.len() != COLUMNS {
            return TradeRecord::default();
        }

        let field = |idx: usize| {
            let value = fields[idx].trim();
            (!value.is_empty()).then_some(value)
        };

        TradeRecord {
            timestamp: field(0).and_then(parse_timestamp),
            company: field(1).map(CompanyId::from),
            kind: field(2).and_then(|code| self.config.kind_for(code)),
            amount: field(3).and_then(parse_amount),
        }
    }
}

impl TradeSource for CsvTradeSource {
    fn load(&self) -> Result<Vec<TradeRecord>> {
        let bytes = fs::read(&self.path).map_err(|source| SourceError::Unavailable {
            path: self.path.clone(),
            source,
        })?;

        let content = String::from_utf8(bytes).map_err(|e| SourceError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let records = self.parse_str(&content);
        debug!(path = %self.path.display(), records = records.len(), "Loaded trade file");
        Ok(records)
    }
}

/// Split a CSV line on commas, honouring double-quoted fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Epoch seconds, RFC 3339, or a naive date-time taken as UTC.
fn parse_timestamp(raw: &str) -> Option<i64> {
    if let Ok(secs) = raw.parse::<i64>() {
        return Some(secs);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().timestamp())
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .ok()
        .filter(|amount| !amount.is_sign_negative() || amount.is_zero())
}
