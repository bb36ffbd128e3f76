//! Reconciliation checks on the company aggregates
//!
//! Both checks are advisory: failures are logged and returned, never raised.

use super::CompanyAggregate;
use log::{info, warn};
use serde::Serialize;

/// Decimal places compared in the premium check
pub const PREMIUM_ROUNDING_DECIMALS: i32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciliationReport {
    /// Companies whose earned + unearned premium does not round to pro-rata GWP
    pub premium_mismatches: Vec<String>,
    /// Number of input policy records
    pub expected_vehicle_count: usize,
    /// Sum of vehicle counts over all aggregates
    pub aggregated_vehicle_count: usize,
}

impl ReconciliationReport {
    pub fn vehicle_count_matches(&self) -> bool {
        self.expected_vehicle_count == self.aggregated_vehicle_count
    }

    pub fn is_clean(&self) -> bool {
        self.premium_mismatches.is_empty() && self.vehicle_count_matches()
    }
}

/// Check the aggregates against the premium and vehicle count invariants
pub fn reconcile(aggregates: &[CompanyAggregate], record_count: usize) -> ReconciliationReport {
    let premium_mismatches: Vec<String> = aggregates
        .iter()
        .filter(|agg| !premium_balances(agg))
        .map(|agg| {
            warn!(
                "Premium check failed for {}: earned {:.2} + unearned {:.2} != pro-rata GWP {:.2}",
                agg.company_name,
                agg.total_earned_premium,
                agg.total_unearned_premium,
                agg.total_pro_rata_gwp
            );
            agg.company_name.clone()
        })
        .collect();

    let aggregated_vehicle_count: usize = aggregates.iter().map(|a| a.total_count_of_vehicles).sum();
    if aggregated_vehicle_count != record_count {
        warn!(
            "Vehicle count check failed: aggregates hold {} vehicles, input had {} records",
            aggregated_vehicle_count, record_count
        );
    }

    let report = ReconciliationReport {
        premium_mismatches,
        expected_vehicle_count: record_count,
        aggregated_vehicle_count,
    };
    if report.is_clean() {
        info!("Reconciliation passed for {} companies", aggregates.len());
    }
    report
}

fn premium_balances(agg: &CompanyAggregate) -> bool {
    let split_total = round_to(agg.total_earned_premium + agg.total_unearned_premium);
    split_total == round_to(agg.total_pro_rata_gwp)
}

fn round_to(value: f64) -> f64 {
    let scale = 10f64.powi(PREMIUM_ROUNDING_DECIMALS);
    (value * scale).round() / scale
}
