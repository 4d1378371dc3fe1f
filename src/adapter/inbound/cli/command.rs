//! Command-line interface definitions.
//!
//! Defines the CLI structure for cancelwatch using `clap`. Every check
//! subcommand takes a trade file and performs one complete run over it.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Detect companies with excessive trade cancellations
#[derive(Parser, Debug)]
#[command(name = "cancelwatch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the cancelwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report offenders, the well-behaved count and run counters
    Report(TradeFileArg),

    /// List companies involved in excessive cancellations
    Offenders(TradeFileArg),

    /// Count companies never involved in excessive cancellations
    WellBehaved(TradeFileArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `cancelwatch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Shared argument for commands that read a trade file.
#[derive(Parser, Debug)]
pub struct TradeFileArg {
    /// Headerless CSV of `dateTime,company,type,amount` rows
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cancelwatch",
            "report",
            "trades.csv",
            "--json",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Report(arg) => assert_eq!(arg.file, PathBuf::from("trades.csv")),
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn well_behaved_uses_kebab_case() {
        let cli = Cli::try_parse_from(["cancelwatch", "well-behaved", "t.csv"]).unwrap();
        assert!(matches!(cli.command, Commands::WellBehaved(_)));
    }
}
