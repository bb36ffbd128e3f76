//! State premium tax rates

use crate::error::{ReportError, Result};
use std::collections::HashMap;

/// Illinois premium tax rate
pub const IL_TAX_RATE: f64 = 0.0251;

/// Tennessee premium tax rate
pub const TN_TAX_RATE: f64 = 0.01766;

/// Premium tax rate by jurisdiction code
///
/// Codes are matched case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRateTable {
    rates: HashMap<String, f64>,
}

impl Default for TaxRateTable {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert("IL".to_string(), IL_TAX_RATE);
        rates.insert("TN".to_string(), TN_TAX_RATE);
        Self { rates }
    }
}

impl TaxRateTable {
    /// Create from loaded CSV data
    pub fn from_loaded(rates: &[(String, f64)]) -> Self {
        Self {
            rates: rates
                .iter()
                .map(|(state, rate)| (state_key(state), *rate))
                .collect(),
        }
    }

    /// Rate for a single jurisdiction
    ///
    /// Fails with [`ReportError::UnknownJurisdiction`] when the code is not
    /// in the table.
    pub fn get_rate(&self, state: &str) -> Result<f64> {
        self.find_rate(state)
            .ok_or_else(|| ReportError::UnknownJurisdiction(state.to_string()))
    }

    /// Rate for a jurisdiction, `None` when the code is not in the table
    pub fn find_rate(&self, state: &str) -> Option<f64> {
        self.rates.get(&state_key(state)).copied()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.rates.contains_key(&state_key(state))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

fn state_key(state: &str) -> String {
    state.trim().to_ascii_uppercase()
}
