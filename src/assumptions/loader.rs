//! CSV-based tax rate loader
//!
//! Expects a header row followed by `state,rate` rows, e.g. `IL,0.0251`.

use crate::error::{ReportError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load tax rates from CSV
/// Returns Vec<(state, rate)> in file order
pub fn load_tax_rates(path: &Path) -> Result<Vec<(String, f64)>> {
    if !path.exists() {
        return Err(ReportError::InputMissing(path.to_path_buf()));
    }
    let file = File::open(path)?;
    load_tax_rates_from_reader(file)
}

pub fn load_tax_rates_from_reader<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rates = Vec::new();

    for result in reader.records() {
        let record = result?;
        let state = record.get(0).unwrap_or_default().to_ascii_uppercase();
        let value = record.get(1).unwrap_or_default();
        let rate: f64 = value
            .parse()
            .ok()
            .filter(|r: &f64| r.is_finite() && *r >= 0.0)
            .ok_or_else(|| ReportError::InvalidTaxRate {
                state: state.clone(),
                value: value.to_string(),
            })?;
        rates.push((state, rate));
    }

    Ok(rates)
}
