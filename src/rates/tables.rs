//! Keyed rate tables used by the provider resolvers
//!
//! Every table answers a lookup for a missing key with zero instead of an
//! error, so an unrecognized settlement bucket or an installment count a
//! provider does not offer simply contributes no rate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FinancingError, Result};

/// Percentage rates keyed by settlement days or installment count
///
/// Rates are in percentage points: `5.19` means 5.19%.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<u32, f64>,
}

impl RateTable {
    /// Build a table from `(key, rate)` pairs
    pub fn from_pairs(pairs: &[(u32, f64)]) -> Self {
        Self {
            rates: pairs.iter().copied().collect(),
        }
    }

    /// Rate for `key`, zero when the table has no entry
    pub fn get_rate(&self, key: u32) -> f64 {
        self.rates.get(&key).copied().unwrap_or(0.0)
    }

    /// Rate for `key` only when the table has an entry
    pub fn entry(&self, key: u32) -> Option<f64> {
        self.rates.get(&key).copied()
    }

    pub fn contains(&self, key: u32) -> bool {
        self.rates.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.rates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Reject negative or non-finite entries
    pub fn validate(&self, table: &'static str) -> Result<()> {
        for (&key, &rate) in &self.rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(FinancingError::InvalidRate {
                    table,
                    key: key.to_string(),
                    rate,
                });
            }
        }
        Ok(())
    }
}

/// Promotional commission keyed by installment count, then settlement days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromoRateTable {
    by_installments: BTreeMap<u32, RateTable>,
}

impl PromoRateTable {
    /// Build from `(installments, settlement_days, rate)` triples
    pub fn from_entries(entries: &[(u32, u32, f64)]) -> Self {
        let mut by_installments: BTreeMap<u32, RateTable> = BTreeMap::new();
        for &(installments, days, rate) in entries {
            by_installments
                .entry(installments)
                .or_default()
                .rates
                .insert(days, rate);
        }
        Self { by_installments }
    }

    /// Promotional commission, `None` when no promotion covers the pair
    pub fn entry(&self, installments: u32, settlement_days: u32) -> Option<f64> {
        self.by_installments
            .get(&installments)
            .and_then(|table| table.entry(settlement_days))
    }

    pub fn validate(&self, table: &'static str) -> Result<()> {
        for (&installments, days) in &self.by_installments {
            for (&day, &rate) in &days.rates {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(FinancingError::InvalidRate {
                        table,
                        key: format!("{installments}x/{day}d"),
                        rate,
                    });
                }
            }
        }
        Ok(())
    }
}

/// No-VAT price multipliers keyed by installment count
///
/// A coefficient of `1.1321` means the financed price is 13.21% above cash
/// before VAT. Absent installment counts read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientTable {
    coefficients: BTreeMap<u32, f64>,
}

impl CoefficientTable {
    pub fn from_pairs(pairs: &[(u32, f64)]) -> Self {
        Self {
            coefficients: pairs.iter().copied().collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.coefficients.keys().copied()
    }

    pub fn get_coefficient(&self, installments: u32) -> f64 {
        self.coefficients.get(&installments).copied().unwrap_or(0.0)
    }

    pub fn validate(&self, table: &'static str) -> Result<()> {
        for (&key, &coefficient) in &self.coefficients {
            if !coefficient.is_finite() || coefficient < 0.0 {
                return Err(FinancingError::InvalidRate {
                    table,
                    key: key.to_string(),
                    rate: coefficient,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_reads_as_zero() {
        let table = RateTable::from_pairs(&[(2, 5.19), (10, 3.79)]);

        assert_eq!(table.get_rate(2), 5.19);
        assert_eq!(table.get_rate(10), 3.79);
        assert_eq!(table.get_rate(7), 0.0);
        assert_eq!(table.entry(7), None);
        assert!(table.contains(2));
    }

    #[test]
    fn test_promo_lookup_needs_both_keys() {
        let promo = PromoRateTable::from_entries(&[(3, 2, 8.49), (3, 10, 7.09), (6, 2, 13.39)]);

        assert_eq!(promo.entry(3, 2), Some(8.49));
        assert_eq!(promo.entry(6, 2), Some(13.39));
        assert_eq!(promo.entry(6, 10), None);
        assert_eq!(promo.entry(12, 2), None);
    }

    #[test]
    fn test_coefficient_default_zero() {
        let coefficients = CoefficientTable::from_pairs(&[(3, 1.1321)]);

        assert_eq!(coefficients.get_coefficient(3), 1.1321);
        assert_eq!(coefficients.get_coefficient(4), 0.0);
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let table = RateTable::from_pairs(&[(2, 5.19), (5, -1.0)]);
        let err = table.validate("commission").unwrap_err();
        assert!(matches!(err, FinancingError::InvalidRate { table: "commission", .. }));

        let promo = PromoRateTable::from_entries(&[(3, 2, f64::NAN)]);
        assert!(promo.validate("promo").is_err());
    }

    #[test]
    fn test_tables_read_integer_keyed_json() {
        let table: RateTable = serde_json::from_str(r#"{"2": 5.19, "40": 1.79}"#).unwrap();
        assert_eq!(table.get_rate(40), 1.79);
        assert_eq!(table.len(), 2);

        let promo: PromoRateTable = serde_json::from_str(r#"{"3": {"2": 8.49}}"#).unwrap();
        assert_eq!(promo.entry(3, 2), Some(8.49));
    }
}
