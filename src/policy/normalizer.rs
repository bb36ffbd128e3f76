//! Data-entry correction and typing of raw policy rows
//!
//! The source spreadsheets occasionally carry the letter `O` where the digit
//! `0` was meant, in the date and premium columns. A column with at least one
//! such value is corrected wholesale before parsing; other columns are parsed
//! as they are.

use super::{PolicyRecord, RawPolicyRecord};
use crate::error::{ReportError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};

/// Columns subject to the `O` -> `0` correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectedColumn {
    EffectiveDate,
    ExpirationDate,
    AnnualGwp,
}

impl CorrectedColumn {
    pub const ALL: [CorrectedColumn; 3] = [
        CorrectedColumn::EffectiveDate,
        CorrectedColumn::ExpirationDate,
        CorrectedColumn::AnnualGwp,
    ];

    /// Column header in the input file
    pub fn name(self) -> &'static str {
        match self {
            CorrectedColumn::EffectiveDate => "Effective Date",
            CorrectedColumn::ExpirationDate => "Expiration Date",
            CorrectedColumn::AnnualGwp => "Annual GWP",
        }
    }

    fn value_mut(self, record: &mut RawPolicyRecord) -> &mut String {
        match self {
            CorrectedColumn::EffectiveDate => &mut record.effective_date,
            CorrectedColumn::ExpirationDate => &mut record.expiration_date,
            CorrectedColumn::AnnualGwp => &mut record.annual_gwp,
        }
    }
}

/// Accepted date layouts, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Correct data-entry mistakes and convert raw rows into typed records
///
/// Fails on the first value that still does not parse after correction.
pub fn normalize(mut raw: Vec<RawPolicyRecord>) -> Result<Vec<PolicyRecord>> {
    for column in CorrectedColumn::ALL {
        let changed = correct_column(&mut raw, column);
        if changed > 0 {
            info!("Replaced letter O with 0 in {} '{}' values", changed, column.name());
        }
    }

    let records = raw
        .into_iter()
        .map(parse_record)
        .collect::<Result<Vec<_>>>()?;

    debug!("Normalized {} policy records", records.len());
    Ok(records)
}

/// Replace every `O` with `0` across the column if any value contains one
///
/// Returns the number of values changed.
fn correct_column(records: &mut [RawPolicyRecord], column: CorrectedColumn) -> usize {
    let affected = records
        .iter_mut()
        .any(|r| column.value_mut(r).contains('O'));
    if !affected {
        return 0;
    }

    let mut changed = 0;
    for record in records.iter_mut() {
        let value = column.value_mut(record);
        if value.contains('O') {
            *value = value.replace('O', "0");
            changed += 1;
        }
    }
    changed
}

fn parse_record(raw: RawPolicyRecord) -> Result<PolicyRecord> {
    let invalid = |column: CorrectedColumn, value: &str| ReportError::InvalidField {
        row: raw.row,
        company: raw.company_name.clone(),
        vin: raw.vin.clone(),
        field: column.name(),
        value: value.to_string(),
    };

    let effective_date = parse_date(&raw.effective_date)
        .ok_or_else(|| invalid(CorrectedColumn::EffectiveDate, &raw.effective_date))?;
    let expiration_date = parse_date(&raw.expiration_date)
        .ok_or_else(|| invalid(CorrectedColumn::ExpirationDate, &raw.expiration_date))?;
    let annual_gwp = parse_amount(&raw.annual_gwp)
        .ok_or_else(|| invalid(CorrectedColumn::AnnualGwp, &raw.annual_gwp))?;

    Ok(PolicyRecord {
        company_name: raw.company_name,
        vin: raw.vin,
        state: raw.state,
        effective_date,
        expiration_date,
        annual_gwp,
    })
}

/// Parse a calendar date; a time of day (spreadsheet export) is dropped
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parse a premium amount, tolerating a currency sign and thousands separators
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
