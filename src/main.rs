//! Premium Report CLI
//!
//! Builds the company premium report for one report date

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use premium_report::config::DEFAULT_INPUT_PATH;
use premium_report::{parse_report_date, run_report, ReportConfig, RunSummary};
use std::path::PathBuf;
use std::time::Instant;

/// Pro-rata, earned/unearned premium and premium tax by company
#[derive(Parser, Debug)]
#[command(name = "premium-report", version, about)]
struct Cli {
    /// As-of date for earned/unearned premium (YYYY-MM-DD)
    #[arg(long, value_parser = parse_report_date)]
    report_date: NaiveDate,

    /// Policy records CSV
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory for the report files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// `state,rate` CSV replacing the built-in tax rates
    #[arg(long)]
    tax_rates: Option<PathBuf>,

    /// Also write policy_detail-<report_date>.csv
    #[arg(long)]
    detail: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = Instant::now();

    let config = ReportConfig {
        report_date: cli.report_date,
        input_path: cli.input,
        output_dir: cli.output_dir,
        tax_rates_path: cli.tax_rates,
        write_detail: cli.detail,
    };

    let summary = run_report(&config)
        .with_context(|| format!("failed to build report from {}", config.input_path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
        println!("\nTotal time: {:?}", start.elapsed());
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("Premium report as of {}", summary.report_date);
    println!("  Policies:  {}", summary.records);
    println!("  Companies: {}", summary.companies);
    println!("  Report:    {}", summary.aggregated_report.display());
    if let Some(detail) = &summary.detail_report {
        println!("  Detail:    {}", detail.display());
    }
    if !summary.untaxed_states.is_empty() {
        println!("  Untaxed states: {}", summary.untaxed_states.join(", "));
    }

    let recon = &summary.reconciliation;
    println!("\nReconciliation:");
    if recon.premium_mismatches.is_empty() {
        println!("  Earned + unearned premium matches pro-rata GWP for every company");
    } else {
        for company in &recon.premium_mismatches {
            println!("  MISMATCH premium: {}", company);
        }
    }
    if recon.vehicle_count_matches() {
        println!("  Vehicle count matches input ({})", recon.expected_vehicle_count);
    } else {
        println!(
            "  MISMATCH vehicle count: {} aggregated vs {} input records",
            recon.aggregated_vehicle_count, recon.expected_vehicle_count
        );
    }
}
