//! Earned and unearned premium as of a report date
//!
//! A policy is in exactly one regime relative to the report date R:
//! - Not yet effective: R <= effective date
//! - In force: effective date < R < expiration date
//! - Expired: R >= expiration date
//!
//! The boundaries belong to the outer regimes, so current days effective plus
//! days remaining always equals total effective days.

use super::Proration;
use crate::error::{ReportError, Result};
use crate::policy::PolicyRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Position of the report date relative to the policy term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    NotYetEffective,
    InForce,
    Expired,
}

impl Regime {
    pub fn classify(effective: NaiveDate, expiration: NaiveDate, report_date: NaiveDate) -> Self {
        if report_date <= effective {
            Regime::NotYetEffective
        } else if report_date < expiration {
            Regime::InForce
        } else {
            Regime::Expired
        }
    }
}

/// Split of pro-rata GWP around the report date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PremiumSplit {
    pub regime: Regime,
    pub current_days_effective: i64,
    pub days_remaining: i64,
    pub earned_premium: f64,
    pub unearned_premium: f64,
}

/// Split a prorated policy into earned and unearned premium
///
/// Fails with [`ReportError::ZeroDuration`] when the policy has no effective
/// days, since the daily premium is undefined.
pub fn split_premium(
    record: &PolicyRecord,
    proration: &Proration,
    report_date: NaiveDate,
) -> Result<PremiumSplit> {
    let daily_rate = proration.daily_rate().ok_or_else(|| ReportError::ZeroDuration {
        company: record.company_name.clone(),
        vin: record.vin.clone(),
    })?;

    let total = proration.total_effective_days;
    let regime = Regime::classify(record.effective_date, record.expiration_date, report_date);

    let (current_days_effective, days_remaining) = match regime {
        Regime::NotYetEffective => (0, total),
        Regime::InForce => (
            (report_date - record.effective_date).num_days(),
            (record.expiration_date - report_date).num_days(),
        ),
        Regime::Expired => (total, 0),
    };

    Ok(PremiumSplit {
        regime,
        current_days_effective,
        days_remaining,
        earned_premium: daily_rate * current_days_effective as f64,
        unearned_premium: daily_rate * days_remaining as f64,
    })
}
