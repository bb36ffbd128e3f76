//! End-to-end report run
//!
//! normalize -> premium engine -> aggregate -> reconcile -> stamp -> write

use crate::assumptions::{load_tax_rates, TaxRateTable};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::policy::{load_policies, normalize, RawPolicyRecord};
use crate::premium::{PremiumEngine, PremiumRun};
use crate::report::{
    aggregate_by_company, reconcile, stamp_report_date, write_aggregated_report,
    write_detail_report, CompanyAggregate, ReconciliationReport, ReportRow,
};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// In-memory result of the calculation stages
#[derive(Debug, Clone)]
pub struct BuiltReport {
    pub report_date: NaiveDate,
    pub premium: PremiumRun,
    pub aggregates: Vec<CompanyAggregate>,
    pub rows: Vec<ReportRow>,
    pub reconciliation: ReconciliationReport,
}

/// What a run produced, printed by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub report_date: NaiveDate,
    pub records: usize,
    pub companies: usize,
    pub aggregated_report: PathBuf,
    pub detail_report: Option<PathBuf>,
    pub untaxed_states: Vec<String>,
    pub reconciliation: ReconciliationReport,
}

/// Run every calculation stage over raw rows
pub fn build_report(
    raw: Vec<RawPolicyRecord>,
    tax_rates: TaxRateTable,
    report_date: NaiveDate,
) -> Result<BuiltReport> {
    let records = normalize(raw)?;
    let record_count = records.len();

    let engine = PremiumEngine::new(tax_rates, report_date);
    let premium = engine.calculate_all(&records)?;

    let aggregates = aggregate_by_company(&premium.calculations);
    let reconciliation = reconcile(&aggregates, record_count);
    let rows = stamp_report_date(&aggregates, report_date);

    Ok(BuiltReport {
        report_date,
        premium,
        aggregates,
        rows,
        reconciliation,
    })
}

/// Load input, build the report and write the output files
pub fn run_report(config: &ReportConfig) -> Result<RunSummary> {
    let tax_rates = match &config.tax_rates_path {
        Some(path) => {
            let table = TaxRateTable::from_loaded(&load_tax_rates(path)?);
            info!("Loaded {} tax rates from {}", table.len(), path.display());
            table
        }
        None => TaxRateTable::default(),
    };

    let raw = load_policies(&config.input_path)?;
    let built = build_report(raw, tax_rates, config.report_date)?;

    let aggregated_report = config.aggregated_report_path();
    write_aggregated_report(&aggregated_report, &built.rows)?;

    let detail_report = if config.write_detail {
        let path = config.detail_report_path();
        write_detail_report(&path, &built.premium.calculations, config.report_date)?;
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        report_date: config.report_date,
        records: built.premium.calculations.len(),
        companies: built.aggregates.len(),
        aggregated_report,
        detail_report,
        untaxed_states: built.premium.unknown_states.into_iter().collect(),
        reconciliation: built.reconciliation,
    })
}
