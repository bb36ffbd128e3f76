//! Policy record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Policy row as read from the input file
///
/// Dates and GWP stay as text until the normalizer has corrected
/// data-entry mistakes in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPolicyRecord {
    /// Spreadsheet row number (header is row 1)
    #[serde(skip)]
    pub row: usize,

    #[serde(rename = "Company Name")]
    pub company_name: String,

    #[serde(rename = "VIN")]
    pub vin: String,

    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "Effective Date")]
    pub effective_date: String,

    #[serde(rename = "Expiration Date")]
    pub expiration_date: String,

    #[serde(rename = "Annual GWP")]
    pub annual_gwp: String,
}

/// Typed policy record, one vehicle on one policy
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRecord {
    pub company_name: String,
    pub vin: String,
    /// Two-letter jurisdiction code
    pub state: String,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    /// Full-term gross written premium
    pub annual_gwp: f64,
}

impl PolicyRecord {
    pub fn new(
        company_name: impl Into<String>,
        vin: impl Into<String>,
        state: impl Into<String>,
        effective_date: NaiveDate,
        expiration_date: NaiveDate,
        annual_gwp: f64,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            vin: vin.into(),
            state: state.into(),
            effective_date,
            expiration_date,
            annual_gwp,
        }
    }
}
