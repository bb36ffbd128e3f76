//! Premium engine: runs proration, earned/unearned split and premium tax
//! for every policy against a single report date

use super::{prorate, split_premium, PremiumSplit, Proration, Regime};
use crate::assumptions::TaxRateTable;
use crate::error::Result;
use crate::policy::PolicyRecord;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// All derived values for one policy
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyCalculation {
    pub record: PolicyRecord,
    pub proration: Proration,
    pub split: PremiumSplit,
    /// Rate applied, `None` when the state is not in the tax table
    pub tax_rate: Option<f64>,
    pub taxes: f64,
}

impl PolicyCalculation {
    pub fn company_name(&self) -> &str {
        &self.record.company_name
    }

    pub fn regime(&self) -> Regime {
        self.split.regime
    }
}

/// Output of a batch run
#[derive(Debug, Clone, Default)]
pub struct PremiumRun {
    pub calculations: Vec<PolicyCalculation>,
    /// Distinct upper-cased states that were taxed at zero
    pub unknown_states: BTreeSet<String>,
}

/// Calculates derived premium fields as of one report date
#[derive(Debug, Clone)]
pub struct PremiumEngine {
    tax_rates: TaxRateTable,
    report_date: NaiveDate,
}

impl PremiumEngine {
    pub fn new(tax_rates: TaxRateTable, report_date: NaiveDate) -> Self {
        Self { tax_rates, report_date }
    }

    pub fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    pub fn tax_rates(&self) -> &TaxRateTable {
        &self.tax_rates
    }

    /// Calculate a single policy
    ///
    /// A state missing from the tax table is taxed at zero; see
    /// [`PolicyCalculation::tax_rate`].
    pub fn calculate_policy(&self, record: &PolicyRecord) -> Result<PolicyCalculation> {
        let proration = prorate(record);
        if proration.total_effective_days < 0 {
            warn!(
                "{}, VIN {}: expiration {} precedes effective date {}",
                record.company_name, record.vin, record.expiration_date, record.effective_date
            );
        }
        if record.annual_gwp < 0.0 {
            warn!(
                "{}, VIN {}: negative annual GWP {:.2}",
                record.company_name, record.vin, record.annual_gwp
            );
        }

        let split = split_premium(record, &proration, self.report_date)?;

        let tax_rate = self.tax_rates.find_rate(&record.state);
        let taxes = tax_rate.map_or(0.0, |rate| proration.pro_rata_gwp * rate);

        Ok(PolicyCalculation {
            record: record.clone(),
            proration,
            split,
            tax_rate,
            taxes,
        })
    }

    /// Calculate every policy, stopping at the first fatal error
    pub fn calculate_all(&self, records: &[PolicyRecord]) -> Result<PremiumRun> {
        let mut run = PremiumRun {
            calculations: Vec::with_capacity(records.len()),
            unknown_states: BTreeSet::new(),
        };

        for record in records {
            let calc = self.calculate_policy(record)?;
            if calc.tax_rate.is_none() {
                let state = record.state.trim().to_ascii_uppercase();
                if run.unknown_states.insert(state.clone()) {
                    warn!("No tax rate for state {:?}, taxing its policies at zero", state);
                }
            }
            debug!(
                "{} {}: {:?}, earned {:.2}, unearned {:.2}, taxes {:.2}",
                calc.record.company_name,
                calc.record.vin,
                calc.split.regime,
                calc.split.earned_premium,
                calc.split.unearned_premium,
                calc.taxes
            );
            run.calculations.push(calc);
        }

        info!(
            "Calculated {} policies as of {}",
            run.calculations.len(),
            self.report_date
        );
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> PremiumEngine {
        PremiumEngine::new(TaxRateTable::default(), date(2022, 7, 1))
    }

    #[test]
    fn test_single_policy_end_to_end() {
        let record = PolicyRecord::new("Acme Freight", "V1", "IL", date(2022, 1, 1), date(2023, 1, 1), 3650.0);
        let calc = engine().calculate_policy(&record).unwrap();

        assert_eq!(calc.proration.total_effective_days, 365);
        assert_relative_eq!(calc.proration.pro_rata_gwp, 3650.0, epsilon = 1e-9);
        assert_eq!(calc.regime(), Regime::InForce);
        assert_eq!(calc.split.current_days_effective, 181);
        assert_eq!(calc.split.days_remaining, 184);
        assert_relative_eq!(calc.split.earned_premium, 1810.0, epsilon = 1e-6);
        assert_relative_eq!(calc.split.unearned_premium, 1840.0, epsilon = 1e-6);
        assert_relative_eq!(
            calc.split.earned_premium + calc.split.unearned_premium,
            calc.proration.pro_rata_gwp,
            epsilon = 1e-9
        );
        assert_relative_eq!(calc.taxes, 3650.0 * 0.0251, epsilon = 1e-9);
    }

    #[test]
    fn test_state_tax_amounts() {
        // 365 days at 1000 annual GWP gives pro-rata GWP of exactly 1000
        let il = PolicyRecord::new("Acme Freight", "V1", "IL", date(2022, 1, 1), date(2023, 1, 1), 1000.0);
        let tn = PolicyRecord::new("Acme Freight", "V2", "tn", date(2022, 1, 1), date(2023, 1, 1), 1000.0);

        let il_calc = engine().calculate_policy(&il).unwrap();
        let tn_calc = engine().calculate_policy(&tn).unwrap();

        assert_relative_eq!(il_calc.taxes, 25.10, epsilon = 1e-9);
        assert_relative_eq!(tn_calc.taxes, 17.66, epsilon = 1e-9);
        assert_eq!(tn_calc.tax_rate, Some(0.01766));
    }

    #[test]
    fn test_unknown_state_taxed_at_zero() {
        let records = vec![
            PolicyRecord::new("Acme Freight", "V1", "CA", date(2022, 1, 1), date(2023, 1, 1), 1000.0),
            PolicyRecord::new("Acme Freight", "V2", "ca", date(2022, 1, 1), date(2023, 1, 1), 1000.0),
            PolicyRecord::new("Acme Freight", "V3", "IL", date(2022, 1, 1), date(2023, 1, 1), 1000.0),
        ];
        let run = engine().calculate_all(&records).unwrap();

        assert_eq!(run.calculations.len(), 3);
        assert_eq!(run.calculations[0].taxes, 0.0);
        assert_eq!(run.calculations[0].tax_rate, None);
        assert_eq!(run.unknown_states.len(), 1);
        assert!(run.unknown_states.contains("CA"));
    }

    #[test]
    fn test_zero_duration_aborts_batch() {
        let records = vec![
            PolicyRecord::new("Acme Freight", "V1", "IL", date(2022, 1, 1), date(2023, 1, 1), 1000.0),
            PolicyRecord::new("Blue Line", "V2", "TN", date(2022, 3, 1), date(2022, 3, 1), 1000.0),
        ];

        assert!(matches!(
            engine().calculate_all(&records),
            Err(ReportError::ZeroDuration { company, vin }) if company == "Blue Line" && vin == "V2"
        ));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let records = vec![
            PolicyRecord::new("Acme Freight", "V1", "IL", date(2022, 1, 1), date(2023, 1, 1), 1000.0),
            PolicyRecord::new("Blue Line", "V2", "TN", date(2022, 3, 1), date(2023, 3, 1), 2500.0),
        ];
        let engine = engine();

        let first = engine.calculate_all(&records).unwrap();
        let second = engine.calculate_all(&records).unwrap();
        assert_eq!(first.calculations, second.calculations);
    }
}
