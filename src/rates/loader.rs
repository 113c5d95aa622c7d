//! Load rate sheets from JSON
//!
//! A loaded sheet replaces the built-in tables for the lifetime of the
//! engine that owns it. Every entry is validated before the sheet is
//! handed out.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::RateSheet;
use crate::error::Result;

/// Load and validate a rate sheet from a JSON file
pub fn load_rate_sheet<P: AsRef<Path>>(path: P) -> Result<RateSheet> {
    let path = path.as_ref();
    debug!("Loading rate sheet from {}", path.display());
    let file = File::open(path)?;
    load_rate_sheet_from_reader(BufReader::new(file))
}

/// Load and validate a rate sheet from any JSON reader
pub fn load_rate_sheet_from_reader<R: Read>(reader: R) -> Result<RateSheet> {
    let sheet: RateSheet = serde_json::from_reader(reader)?;
    sheet.validate()?;
    debug!(
        "Rate sheet loaded: {} viumi, {} naranja financing entries, {} mipyme entries",
        sheet.viumi.financing.len(),
        sheet.naranja.financing.len(),
        sheet.mipyme.len()
    );
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinancingError;

    #[test]
    fn test_default_sheet_survives_json() {
        let json = serde_json::to_string(&RateSheet::default()).unwrap();
        let sheet = load_rate_sheet_from_reader(json.as_bytes()).unwrap();
        assert_eq!(sheet, RateSheet::default());
    }

    #[test]
    fn test_mipyme_defaults_when_omitted() {
        let json = r#"{
            "viumi": {"commission": {"2": 5.0}, "financing": {"6": 20.0}},
            "naranja": {"commission": {"2": 4.0}, "financing": {}},
            "payway": {"commission": 1.5, "coefficients": {"3": 1.12}}
        }"#;
        let sheet = load_rate_sheet_from_reader(json.as_bytes()).unwrap();

        assert_eq!(sheet.viumi.commission.get_rate(2), 5.0);
        assert_eq!(sheet.viumi.promo_commission.entry(3, 2), None);
        assert_eq!(sheet.mipyme.get_rate(3), 6.07);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let json = r#"{
            "viumi": {"commission": {"2": -5.0}, "financing": {}},
            "naranja": {"commission": {}, "financing": {}},
            "payway": {"commission": 1.5, "coefficients": {}}
        }"#;
        let err = load_rate_sheet_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            FinancingError::InvalidRate { table: "viumi.commission", .. }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_rate_sheet_from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, FinancingError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_rate_sheet("/nonexistent/rates.json").unwrap_err();
        assert!(matches!(err, FinancingError::Io(_)));
    }
}
