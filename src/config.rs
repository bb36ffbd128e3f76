//! Run configuration
//!
//! The report date is parsed once here and handed to every stage that needs it.

use crate::error::{ReportError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Format of the report date on the command line and in file names
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default input file name
pub const DEFAULT_INPUT_PATH: &str = "input_data.csv";

/// Parameters for a single report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// As-of date for earned/unearned premium
    pub report_date: NaiveDate,

    /// Policy records CSV
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Directory receiving the report files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Optional `state,rate` CSV replacing the built-in tax rates
    #[serde(default)]
    pub tax_rates_path: Option<PathBuf>,

    /// Also write the per-policy detail report
    #[serde(default)]
    pub write_detail: bool,
}

fn default_input_path() -> PathBuf { PathBuf::from(DEFAULT_INPUT_PATH) }
fn default_output_dir() -> PathBuf { PathBuf::from(".") }

impl ReportConfig {
    /// Config with default paths for the given report date
    pub fn new(report_date: NaiveDate) -> Self {
        Self {
            report_date,
            input_path: default_input_path(),
            output_dir: default_output_dir(),
            tax_rates_path: None,
            write_detail: false,
        }
    }

    /// `aggregated_report-<report_date>.csv` inside the output directory
    pub fn aggregated_report_path(&self) -> PathBuf {
        dated_file(&self.output_dir, "aggregated_report", self.report_date)
    }

    /// `policy_detail-<report_date>.csv` inside the output directory
    pub fn detail_report_path(&self) -> PathBuf {
        dated_file(&self.output_dir, "policy_detail", self.report_date)
    }
}

fn dated_file(dir: &Path, stem: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}-{}.csv", stem, date.format(REPORT_DATE_FORMAT)))
}

/// Parse an ISO-8601 (`YYYY-MM-DD`) report date
pub fn parse_report_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), REPORT_DATE_FORMAT)
        .map_err(|_| ReportError::InvalidReportDate(text.to_string()))
}
