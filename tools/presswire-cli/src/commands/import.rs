//! Rate-sheet import command.

use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use presswire_commerce::import::{parse_sheet, ImportReport};
use presswire_commerce::money::Currency;
use presswire_store::{import_sheet, RestCatalog};

use crate::config::Config;
use crate::output::Output;

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the rate-sheet CSV
    pub file: PathBuf,

    /// Managed data platform base URL; validate only when absent
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Platform API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Currency the sheet is quoted in
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub async fn run(args: ImportArgs, config: &Config, output: &Output) -> Result<()> {
    let data = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let Some(currency) = Currency::from_code(&args.currency) else {
        bail!("unknown currency: {}", args.currency);
    };

    let endpoint = args.endpoint.clone().or_else(|| config.endpoint.clone());

    let report = match endpoint {
        None => {
            // Validation pass only; nothing leaves this machine.
            output.info(&format!("Validating {} (dry run)", args.file.display()));
            let parse = parse_sheet(&data, currency);
            output.debug(&format!("parsed {} usable rows", parse.rows.len()));
            let mut report = parse.report;
            report.imported = parse.rows.len();
            report
        }
        Some(endpoint) => {
            let parse = parse_sheet(&data, currency);
            let rows = parse.rows.len();
            if rows == 0 {
                output.warn("Sheet has no importable rows");
                print_report(&parse.report, output)?;
                return Ok(());
            }

            if !args.yes && !output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Upsert {rows} publications into {endpoint}?"))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    output.info("Aborted");
                    return Ok(());
                }
            }

            let mut store = RestCatalog::new(endpoint);
            if let Some(key) = args.api_key.clone().or_else(|| config.api_key.clone()) {
                store = store.with_api_key(key);
            }

            let spinner = progress_spinner(output, rows);
            let report = import_sheet(&store, &data, currency).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            report
        }
    };

    print_report(&report, output)?;
    if !report.is_clean() {
        bail!("{} row(s) failed", report.error_count());
    }
    Ok(())
}

fn progress_spinner(output: &Output, rows: usize) -> Option<ProgressBar> {
    if output.is_json() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Upserting {rows} publications..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

fn print_report(report: &ImportReport, output: &Output) -> Result<()> {
    if output.is_json() {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    output.header("Import report");
    output.info(&format!("Rows:     {}", report.total));
    output.success(&format!("Imported: {}", report.imported));
    if report.skipped > 0 {
        output.warn(&format!("Skipped:  {} (blank publication name)", report.skipped));
    }
    for error in &report.errors {
        let name = error.name.as_deref().unwrap_or("<unreadable>");
        output.error(&format!("Row {} ({}): {}", error.row, name, error.message));
    }
    Ok(())
}
