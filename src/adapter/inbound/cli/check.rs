//! Handlers for the trade-file commands: `report`, `offenders`, `well-behaved`.

use crate::adapter::inbound::cli::command::TradeFileArg;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::source::CsvTradeSource;
use crate::application::checker::CancellationChecker;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn checker(args: &TradeFileArg, config: &Config) -> CancellationChecker<CsvTradeSource> {
    let source = CsvTradeSource::new(&args.file, config.source.clone());
    CancellationChecker::new(source, config.monitor.clone())
}

/// Execute `report`: one run, every result.
pub fn report(args: &TradeFileArg, config: &Config) -> Result<()> {
    let summary = checker(args, config).run()?;

    if output::is_json() {
        return output::json_payload("report", &summary);
    }

    output::section("Excessive cancellations");
    output::field("File", args.file.display());
    output::field(
        "Window",
        format!(
            "{}s, threshold {}",
            config.monitor.window_secs, config.monitor.threshold
        ),
    );
    output::detail("Cancel code", &config.source.cancel_code);
    output::detail("Purchase code", &config.source.purchase_code);
    output::field("Records", summary.records_ingested);
    output::field("Dropped", output::muted(summary.records_dropped));
    output::field("Companies", summary.companies_tracked);
    output::field("Well-behaved", output::highlight(summary.well_behaved));
    output::field("Offenders", summary.offenders.len());

    if summary.offenders.is_empty() {
        output::success("No company exceeded the cancellation threshold");
    } else {
        for company in &summary.offenders {
            output::item(company);
        }
    }

    if summary.companies_tracked == 0 && summary.records_ingested > 0 {
        output::warning("No valid records found; check the file format and type codes");
    }

    Ok(())
}

/// Execute `offenders`: one company per line.
pub fn offenders(args: &TradeFileArg, config: &Config) -> Result<()> {
    let offenders = checker(args, config).companies_involved_in_excessive_cancellations()?;

    if output::is_json() {
        return output::json_payload("offenders", &offenders);
    }

    for company in &offenders {
        output::value(company);
    }
    Ok(())
}

/// Execute `well-behaved`: the count alone.
pub fn well_behaved(args: &TradeFileArg, config: &Config) -> Result<()> {
    let count = checker(args, config).total_number_of_well_behaved_companies()?;

    if output::is_json() {
        return output::json_payload("well_behaved", &count);
    }

    output::value(count);
    Ok(())
}
