//! Engine configuration
//!
//! Reads the VAT uplift and the installment counts offered in plan tables.
//! The reference price settlement (10 days) is fixed and not configurable.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FinancingError, Result};
use crate::rates::DEFAULT_VAT_PCT;

/// Parameters of a quote engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// VAT applied over commission and financing, in percent (21.0 = 21%)
    #[serde(default = "default_vat_pct")]
    pub vat_pct: f64,

    /// Installment counts listed by the plan table, ascending
    #[serde(default = "default_plan_installments")]
    pub plan_installments: Vec<u32>,
}

fn default_vat_pct() -> f64 { DEFAULT_VAT_PCT }
fn default_plan_installments() -> Vec<u32> { vec![1, 3, 6, 9, 12] }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vat_pct: DEFAULT_VAT_PCT,
            plan_installments: default_plan_installments(),
        }
    }
}

impl EngineConfig {
    /// Check the VAT is usable and plan counts are positive
    pub fn validate(&self) -> Result<()> {
        if !self.vat_pct.is_finite() || self.vat_pct < 0.0 {
            return Err(FinancingError::InvalidRate {
                table: "config.vat_pct",
                key: "vat".to_string(),
                rate: self.vat_pct,
            });
        }
        if let Some(&zero) = self.plan_installments.iter().find(|&&n| n == 0) {
            return Err(FinancingError::InvalidInstallments(zero));
        }
        Ok(())
    }
}

/// Load an engine config from a JSON file, filling omitted fields with defaults
pub fn load_engine_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    debug!("Loading engine config from {}", path.display());
    let file = File::open(path)?;
    let mut config: EngineConfig = serde_json::from_reader(BufReader::new(file))?;
    config.plan_installments.sort_unstable();
    config.plan_installments.dedup();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.vat_pct, 21.0);
    }

    #[test]
    fn test_load_sorts_plans() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"vat_pct": 10.5, "plan_installments": [12, 3, 1, 3]}}"#).unwrap();

        let config = load_engine_config(file.path()).unwrap();
        assert_eq!(config.vat_pct, 10.5);
        assert_eq!(config.plan_installments, vec![1, 3, 12]);
    }

    #[test]
    fn test_zero_installment_plan_rejected() {
        let config = EngineConfig {
            plan_installments: vec![0, 3],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FinancingError::InvalidInstallments(0))
        ));
    }

    #[test]
    fn test_negative_vat_rejected() {
        let config = EngineConfig {
            vat_pct: -21.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
