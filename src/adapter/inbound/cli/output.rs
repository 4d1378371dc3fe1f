//! CLI output formatting.
//!
//! Human-readable output uses colored symbols and aligned fields. In JSON
//! mode every line is an object of the form `{"type": ..., "payload": ...}`
//! so scripts can consume the stream line by line.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
    /// Emit ANSI styling in human-readable output.
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color: false,
        }
    }

    /// Resolve the `--color` choice against whether stdout is a terminal.
    #[must_use]
    pub fn with_color(mut self, choice: &ColorChoice) -> Self {
        self.color = match choice {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        self
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn detail_hidden(config: OutputConfig) -> bool {
    config.verbose == 0 || regular_output_suppressed(config)
}

fn paint(config: OutputConfig, text: &str, style: impl Fn(&str) -> String) -> String {
    if config.color && !config.json {
        style(text)
    } else {
        text.to_string()
    }
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Emit a serializable payload as a single JSON line.
pub fn json_payload(kind: &str, payload: &impl Serialize) -> crate::error::Result<()> {
    emit_json_line(kind, serde_json::to_value(payload)?);
    Ok(())
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", paint(config, title, |t| t.bold().to_string()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let label = format!("{label:<14}");
    println!("  {} {}", paint(config, &label, |t| t.dimmed().to_string()), value);
}

/// Print a labeled value only when `-v` was given.
pub fn detail(label: &str, value: impl Display) {
    if detail_hidden(read_config()) {
        return;
    }
    field(label, value);
}

/// Print a bare value, even in quiet mode.
///
/// Used for the single result of commands meant to be piped.
pub fn value(value: impl Display) {
    println!("{value}");
}

/// Print a list entry.
pub fn item(value: impl Display) {
    let config = read_config();

    if config.json {
        emit_json_line("item", json!({ "value": value.to_string() }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", paint(config, "•", |t| t.red().to_string()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", paint(config, "✓", |t| t.green().to_string()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", paint(config, "⚠", |t| t.yellow().to_string()), message);
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", paint(config, "×", |t| t.red().to_string()), message);
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    paint(read_config(), &value.to_string(), |t| t.cyan().to_string())
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    paint(read_config(), &value.to_string(), |t| t.dimmed().to_string())
}
