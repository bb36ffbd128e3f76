//! Error types for the premium report pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while building a report
///
/// Reconciliation mismatches are not errors; see
/// [`ReconciliationReport`](crate::report::ReconciliationReport).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file {0} does not exist")]
    InputMissing(PathBuf),

    #[error("input file {0} is empty")]
    InputEmpty(PathBuf),

    #[error("input contains a header but no policy records")]
    NoRecords,

    #[error("row {row} ({company}, VIN {vin}): invalid {field} value {value:?}")]
    InvalidField {
        row: usize,
        company: String,
        vin: String,
        field: &'static str,
        value: String,
    },

    #[error("{company}, VIN {vin}: policy has zero effective days, daily premium is undefined")]
    ZeroDuration { company: String, vin: String },

    #[error("unknown jurisdiction {0:?}")]
    UnknownJurisdiction(String),

    #[error("invalid tax rate {value:?} for {state}")]
    InvalidTaxRate { state: String, value: String },

    #[error("invalid report date {0:?}, expected YYYY-MM-DD")]
    InvalidReportDate(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
