//! CSV report writers

use super::ReportRow;
use crate::error::Result;
use crate::premium::PolicyCalculation;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// One enriched policy row of the detail report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow<'a> {
    #[serde(rename = "Company Name")]
    pub company_name: &'a str,
    #[serde(rename = "VIN")]
    pub vin: &'a str,
    #[serde(rename = "State")]
    pub state: &'a str,
    #[serde(rename = "Effective Date")]
    pub effective_date: NaiveDate,
    #[serde(rename = "Expiration Date")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "Annual GWP")]
    pub annual_gwp: f64,
    #[serde(rename = "Total Effective Days")]
    pub total_effective_days: i64,
    #[serde(rename = "Pro-Rata GWP")]
    pub pro_rata_gwp: f64,
    #[serde(rename = "Current Days Effective")]
    pub current_days_effective: i64,
    #[serde(rename = "Days Remaining")]
    pub days_remaining: i64,
    #[serde(rename = "Earned Premium")]
    pub earned_premium: f64,
    #[serde(rename = "Unearned Premium")]
    pub unearned_premium: f64,
    #[serde(rename = "Taxes")]
    pub taxes: f64,
    #[serde(rename = "Report Date")]
    pub report_date: NaiveDate,
}

impl<'a> DetailRow<'a> {
    pub fn new(calc: &'a PolicyCalculation, report_date: NaiveDate) -> Self {
        Self {
            company_name: &calc.record.company_name,
            vin: &calc.record.vin,
            state: &calc.record.state,
            effective_date: calc.record.effective_date,
            expiration_date: calc.record.expiration_date,
            annual_gwp: calc.record.annual_gwp,
            total_effective_days: calc.proration.total_effective_days,
            pro_rata_gwp: calc.proration.pro_rata_gwp,
            current_days_effective: calc.split.current_days_effective,
            days_remaining: calc.split.days_remaining,
            earned_premium: calc.split.earned_premium,
            unearned_premium: calc.split.unearned_premium,
            taxes: calc.taxes,
            report_date,
        }
    }
}

/// Write the company report to `path`, creating parent directories
pub fn write_aggregated_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let file = create(path)?;
    write_rows(file, rows)?;
    info!("Wrote {} company rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the per-policy detail report to `path`
pub fn write_detail_report(
    path: &Path,
    calculations: &[PolicyCalculation],
    report_date: NaiveDate,
) -> Result<()> {
    let rows: Vec<DetailRow> = calculations
        .iter()
        .map(|calc| DetailRow::new(calc, report_date))
        .collect();
    let file = create(path)?;
    write_rows(file, &rows)?;
    info!("Wrote {} policy rows to {}", rows.len(), path.display());
    Ok(())
}

/// Serialize rows with a header line
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
