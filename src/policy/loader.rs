//! Policy file loader
//!
//! Reads the raw policy CSV. Required columns are `Company Name`, `VIN`,
//! `State`, `Effective Date`, `Expiration Date` and `Annual GWP`; any other
//! columns are ignored.

use super::RawPolicyRecord;
use crate::error::{ReportError, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Load raw policy records from a CSV file
///
/// A missing file, a zero-byte file and a file with no data rows are
/// reported as distinct errors.
pub fn load_policies(path: &Path) -> Result<Vec<RawPolicyRecord>> {
    if !path.exists() {
        return Err(ReportError::InputMissing(path.to_path_buf()));
    }
    if fs::metadata(path)?.len() == 0 {
        return Err(ReportError::InputEmpty(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let records = load_policies_from_reader(file)?;
    info!("Loaded {} policy records from {}", records.len(), path.display());
    Ok(records)
}

/// Load raw policy records from any reader
pub fn load_policies_from_reader<R: Read>(reader: R) -> Result<Vec<RawPolicyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let mut record: RawPolicyRecord = result?;
        // Header occupies row 1
        record.row = idx + 2;
        records.push(record);
    }

    if records.is_empty() {
        return Err(ReportError::NoRecords);
    }

    debug!("Parsed {} rows", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Company Name,VIN,State,Effective Date,Expiration Date,Annual GWP,Agent
Acme Freight,1HGCM82633A004352,IL,2022-01-01,2023-01-01,3650,Smith
Blue Line, 2T1BURHE0JC074312 ,tn,2022-O3-15,2023-03-15,12OO.50,Jones
";

    #[test]
    fn test_load_from_reader() {
        let records = load_policies_from_reader(SAMPLE.as_bytes()).expect("Failed to load");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row, 2);
        assert_eq!(records[0].company_name, "Acme Freight");
        assert_eq!(records[0].annual_gwp, "3650");

        // Fields are trimmed but otherwise left as raw text
        assert_eq!(records[1].row, 3);
        assert_eq!(records[1].vin, "2T1BURHE0JC074312");
        assert_eq!(records[1].state, "tn");
        assert_eq!(records[1].effective_date, "2022-O3-15");
        assert_eq!(records[1].annual_gwp, "12OO.50");
    }

    #[test]
    fn test_missing_column_is_error() {
        let input = "Company Name,VIN,State,Effective Date,Expiration Date\nAcme,V1,IL,2022-01-01,2023-01-01\n";
        assert!(matches!(
            load_policies_from_reader(input.as_bytes()),
            Err(ReportError::Csv(_))
        ));
    }

    #[test]
    fn test_header_only_is_no_records() {
        let input = "Company Name,VIN,State,Effective Date,Expiration Date,Annual GWP\n";
        assert!(matches!(
            load_policies_from_reader(input.as_bytes()),
            Err(ReportError::NoRecords)
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input_data.csv");
        assert!(matches!(load_policies(&path), Err(ReportError::InputMissing(_))));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input_data.csv");
        File::create(&path).unwrap();
        assert!(matches!(load_policies(&path), Err(ReportError::InputEmpty(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input_data.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        drop(file);

        let records = load_policies(&path).expect("Failed to load");
        assert_eq!(records.len(), 2);
    }
}
