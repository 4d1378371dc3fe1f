use clap::Parser;

use cancelwatch::adapter::inbound::cli::command::{Cli, Commands};
use cancelwatch::adapter::inbound::cli::output::{self, OutputConfig};
use cancelwatch::adapter::inbound::cli::{check, config};
use cancelwatch::error::Result;
use cancelwatch::infrastructure::config::settings::Config;
use tracing::debug;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose).with_color(&cli.color));

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = Config::load_or_default(cli.config.as_ref())?;

    match (cli.quiet, cli.verbose) {
        (true, _) => settings.logging.level = "error".into(),
        (false, 1) => settings.logging.level = "debug".into(),
        (false, 2..) => settings.logging.level = "trace".into(),
        (false, 0) => {}
    }
    settings.init_logging();
    debug!(config = ?cli.config, "Configuration loaded");

    match &cli.command {
        Commands::Report(args) => check::report(args, &settings),
        Commands::Offenders(args) => check::offenders(args, &settings),
        Commands::WellBehaved(args) => check::well_behaved(args, &settings),
        Commands::Config(command) => config::execute(command, &settings, cli.config.as_deref()),
    }
}
