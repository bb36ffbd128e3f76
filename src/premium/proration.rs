//! Policy duration and pro-rata GWP

use super::DAYS_IN_YEAR;
use crate::policy::PolicyRecord;
use serde::Serialize;

/// Duration-scaled premium for one policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proration {
    /// Expiration date minus effective date, in days
    pub total_effective_days: i64,
    /// Annual GWP × total effective days / 365
    pub pro_rata_gwp: f64,
}

impl Proration {
    /// Premium per effective day, `None` for a zero-length policy
    pub fn daily_rate(&self) -> Option<f64> {
        if self.total_effective_days == 0 {
            None
        } else {
            Some(self.pro_rata_gwp / self.total_effective_days as f64)
        }
    }
}

/// Prorate a policy's annual GWP over its effective days
///
/// An expiration date before the effective date yields negative days and a
/// negative premium; callers decide how to report it.
pub fn prorate(record: &PolicyRecord) -> Proration {
    let total_effective_days = (record.expiration_date - record.effective_date).num_days();
    let pro_rata_gwp = record.annual_gwp * total_effective_days as f64 / DAYS_IN_YEAR;

    Proration {
        total_effective_days,
        pro_rata_gwp,
    }
}
