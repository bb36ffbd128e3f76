//! Company level report: aggregation, reconciliation and output

mod aggregate;
mod reconcile;
pub mod writer;

pub use aggregate::{CompanyAggregate, ReportRow, aggregate_by_company, stamp_report_date};
pub use reconcile::{ReconciliationReport, reconcile, PREMIUM_ROUNDING_DECIMALS};
pub use writer::{write_aggregated_report, write_detail_report, DetailRow};
