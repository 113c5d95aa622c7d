//! Per-provider rate sheets: commission, financing and promotional tables

use serde::{Deserialize, Serialize};

use super::tables::{CoefficientTable, PromoRateTable, RateTable};
use crate::error::Result;

/// Viümi Macro rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViumiRates {
    /// Commission by settlement days
    pub commission: RateTable,

    /// Financing surcharge by installment count
    pub financing: RateTable,

    /// Macro promotion commission by installments and settlement days.
    /// Replaces both the base commission and the financing surcharge.
    #[serde(default)]
    pub promo_commission: PromoRateTable,
}

impl Default for ViumiRates {
    fn default() -> Self {
        Self {
            commission: RateTable::from_pairs(&[
                (2, 5.19),
                (5, 4.49),
                (10, 3.79),
                (20, 2.99),
                (40, 1.79),
            ]),
            financing: RateTable::from_pairs(&[
                (3, 11.48),
                (6, 21.01),
                (9, 29.83),
                (12, 38.24),
            ]),
            promo_commission: PromoRateTable::from_entries(&[
                // 3 cuotas
                (3, 2, 8.49),
                (3, 5, 7.79),
                (3, 10, 7.09),
                (3, 20, 6.29),
                (3, 40, 5.09),
                // 6 cuotas
                (6, 2, 13.39),
                (6, 5, 12.69),
                (6, 10, 11.99),
                (6, 20, 11.19),
                (6, 40, 9.99),
                // 12 cuotas, long settlement only
                (12, 10, 21.69),
                (12, 40, 19.89),
            ]),
        }
    }
}

/// Naranja rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaranjaRates {
    pub commission: RateTable,
    pub financing: RateTable,
}

impl Default for NaranjaRates {
    fn default() -> Self {
        Self {
            commission: RateTable::from_pairs(&[
                (2, 4.79),
                (5, 4.19),
                (10, 3.59),
                (20, 2.89),
                (40, 1.99),
            ]),
            financing: RateTable::from_pairs(&[
                (3, 12.89),
                (6, 23.37),
                (9, 33.12),
                (12, 42.46),
            ]),
        }
    }
}

/// Payway rates
///
/// Payway prices financing through no-VAT coefficients rather than a
/// surcharge table, and charges a flat commission regardless of settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaywayRates {
    pub commission: f64,
    pub coefficients: CoefficientTable,
}

impl Default for PaywayRates {
    fn default() -> Self {
        Self {
            commission: 1.8,
            coefficients: CoefficientTable::from_pairs(&[
                (3, 1.1321),
                (6, 1.2453),
                (9, 1.3684),
                (12, 1.4932),
            ]),
        }
    }
}

impl PaywayRates {
    /// Financing surcharge implied by the coefficient for `installments`
    ///
    /// The coefficient already includes the commission, so it is taken back
    /// out. An absent coefficient yields no surcharge.
    pub fn financing_from_coefficient(&self, installments: u32) -> f64 {
        let coefficient = self.coefficients.get_coefficient(installments);
        if coefficient == 0.0 {
            return 0.0;
        }
        (coefficient - 1.0) * 100.0 - self.commission
    }

    pub fn validate(&self) -> Result<()> {
        if !self.commission.is_finite() || self.commission < 0.0 {
            return Err(crate::error::FinancingError::InvalidRate {
                table: "payway.commission",
                key: "flat".to_string(),
                rate: self.commission,
            });
        }
        self.coefficients.validate("payway.coefficients")?;

        // A coefficient must at least cover the commission it includes
        for installments in self.coefficients.keys() {
            let financing = self.financing_from_coefficient(installments);
            if financing < 0.0 {
                return Err(crate::error::FinancingError::InvalidRate {
                    table: "payway.coefficients",
                    key: installments.to_string(),
                    rate: financing,
                });
            }
        }
        Ok(())
    }
}

/// Government MiPyME plan financing, shared by every provider (3 and 6 cuotas)
pub fn default_mipyme_financing() -> RateTable {
    RateTable::from_pairs(&[(3, 6.07), (6, 11.47)])
}
