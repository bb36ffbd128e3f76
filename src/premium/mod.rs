//! Premium calculations for individual policies
//!
//! Stages run in a fixed order, each consuming the previous stage's output:
//! proration, earned/unearned split as of the report date, then premium tax.

mod proration;
mod earned;
mod engine;

pub use proration::{Proration, prorate};
pub use earned::{Regime, PremiumSplit, split_premium};
pub use engine::{PremiumEngine, PolicyCalculation, PremiumRun};

/// Days in the proration year (no leap-year adjustment)
pub const DAYS_IN_YEAR: f64 = 365.0;
