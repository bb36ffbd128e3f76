//! Premium Report - pro-rata premium, earned/unearned split and premium taxes
//! aggregated by company
//!
//! This library provides:
//! - Policy record loading and data-entry correction
//! - Pro-rata GWP and earned/unearned premium as of a report date
//! - State premium tax calculation
//! - Company level aggregation with reconciliation checks

pub mod error;
pub mod config;
pub mod policy;
pub mod assumptions;
pub mod premium;
pub mod report;
pub mod pipeline;

// Re-export commonly used types
pub use error::{ReportError, Result};
pub use config::{ReportConfig, parse_report_date};
pub use policy::{PolicyRecord, RawPolicyRecord};
pub use assumptions::TaxRateTable;
pub use premium::{PremiumEngine, PolicyCalculation, Regime};
pub use report::{CompanyAggregate, ReconciliationReport, ReportRow};
pub use pipeline::{build_report, run_report, RunSummary};
