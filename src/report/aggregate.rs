//! Per-company totals

use crate::premium::PolicyCalculation;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals over one company's policies
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyAggregate {
    pub company_name: String,
    pub total_count_of_vehicles: usize,
    pub total_annual_gwp: f64,
    pub total_pro_rata_gwp: f64,
    pub total_earned_premium: f64,
    pub total_unearned_premium: f64,
    pub total_taxes: f64,
}

impl CompanyAggregate {
    fn new(company_name: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            ..Default::default()
        }
    }

    fn add(&mut self, calc: &PolicyCalculation) {
        self.total_count_of_vehicles += 1;
        self.total_annual_gwp += calc.record.annual_gwp;
        self.total_pro_rata_gwp += calc.proration.pro_rata_gwp;
        self.total_earned_premium += calc.split.earned_premium;
        self.total_unearned_premium += calc.split.unearned_premium;
        self.total_taxes += calc.taxes;
    }
}

/// Group calculations by company name and total each group
///
/// One aggregate per distinct company, ordered by company name.
pub fn aggregate_by_company(calculations: &[PolicyCalculation]) -> Vec<CompanyAggregate> {
    let mut by_company: BTreeMap<&str, CompanyAggregate> = BTreeMap::new();

    for calc in calculations {
        by_company
            .entry(calc.company_name())
            .or_insert_with(|| CompanyAggregate::new(calc.company_name()))
            .add(calc);
    }

    by_company.into_values().collect()
}

/// Output row: a company aggregate stamped with the report date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Report Date")]
    pub report_date: NaiveDate,
    #[serde(rename = "Total Count of Vehicles")]
    pub total_count_of_vehicles: usize,
    #[serde(rename = "Total Annual GWP")]
    pub total_annual_gwp: f64,
    #[serde(rename = "Total Pro-Rata GWP")]
    pub total_pro_rata_gwp: f64,
    #[serde(rename = "Total Earned Premium")]
    pub total_earned_premium: f64,
    #[serde(rename = "Total Unearned Premium")]
    pub total_unearned_premium: f64,
    #[serde(rename = "Total Taxes")]
    pub total_taxes: f64,
}

pub fn stamp_report_date(aggregates: &[CompanyAggregate], report_date: NaiveDate) -> Vec<ReportRow> {
    aggregates
        .iter()
        .map(|agg| ReportRow {
            company_name: agg.company_name.clone(),
            report_date,
            total_count_of_vehicles: agg.total_count_of_vehicles,
            total_annual_gwp: agg.total_annual_gwp,
            total_pro_rata_gwp: agg.total_pro_rata_gwp,
            total_earned_premium: agg.total_earned_premium,
            total_unearned_premium: agg.total_unearned_premium,
            total_taxes: agg.total_taxes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::TaxRateTable;
    use crate::policy::PolicyRecord;
    use crate::premium::PremiumEngine;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculations() -> Vec<PolicyCalculation> {
        let records = vec![
            PolicyRecord::new("Blue Line", "B1", "TN", date(2022, 1, 1), date(2023, 1, 1), 1000.0),
            PolicyRecord::new("Acme Freight", "A1", "IL", date(2022, 1, 1), date(2023, 1, 1), 3650.0),
            PolicyRecord::new("Acme Freight", "A2", "IL", date(2022, 3, 1), date(2023, 3, 1), 730.0),
            PolicyRecord::new("Blue Line", "B2", "CA", date(2021, 6, 1), date(2022, 6, 1), 365.0),
            PolicyRecord::new("Acme Freight", "A3", "TN", date(2022, 9, 1), date(2023, 9, 1), 365.0),
        ];
        PremiumEngine::new(TaxRateTable::default(), date(2022, 7, 1))
            .calculate_all(&records)
            .unwrap()
            .calculations
    }

    #[test]
    fn test_one_row_per_company_sorted() {
        let aggregates = aggregate_by_company(&calculations());

        let names: Vec<&str> = aggregates.iter().map(|a| a.company_name.as_str()).collect();
        assert_eq!(names, vec!["Acme Freight", "Blue Line"]);
    }

    #[test]
    fn test_counts_reconstruct_record_count() {
        let calcs = calculations();
        let aggregates = aggregate_by_company(&calcs);

        let total: usize = aggregates.iter().map(|a| a.total_count_of_vehicles).sum();
        assert_eq!(total, calcs.len());
        assert_eq!(aggregates[0].total_count_of_vehicles, 3);
        assert_eq!(aggregates[1].total_count_of_vehicles, 2);
    }

    #[test]
    fn test_sums() {
        let calcs = calculations();
        let aggregates = aggregate_by_company(&calcs);
        let acme = &aggregates[0];

        assert_relative_eq!(acme.total_annual_gwp, 3650.0 + 730.0 + 365.0, epsilon = 1e-9);

        let expected_pro_rata: f64 = calcs
            .iter()
            .filter(|c| c.company_name() == "Acme Freight")
            .map(|c| c.proration.pro_rata_gwp)
            .sum();
        assert_relative_eq!(acme.total_pro_rata_gwp, expected_pro_rata, epsilon = 1e-9);
        assert_relative_eq!(
            acme.total_earned_premium + acme.total_unearned_premium,
            acme.total_pro_rata_gwp,
            epsilon = 1e-6
        );

        // Blue Line: TN policy taxed, CA policy taxed at zero
        let blue = &aggregates[1];
        assert_relative_eq!(blue.total_taxes, 1000.0 * 0.01766, epsilon = 1e-9);
    }

    #[test]
    fn test_aggregation_leaves_input_untouched() {
        let calcs = calculations();
        let before = calcs.clone();
        let _ = aggregate_by_company(&calcs);
        assert_eq!(calcs, before);
    }

    #[test]
    fn test_stamp_report_date() {
        let aggregates = aggregate_by_company(&calculations());
        let rows = stamp_report_date(&aggregates, date(2022, 7, 1));

        assert_eq!(rows.len(), aggregates.len());
        assert!(rows.iter().all(|r| r.report_date == date(2022, 7, 1)));
        assert_eq!(rows[0].company_name, "Acme Freight");
        assert_eq!(rows[0].total_count_of_vehicles, 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_company(&[]).is_empty());
    }
}
