//! Rate tables for every card provider, plus the rate sheet loader

mod providers;
mod tables;
pub mod loader;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use providers::{default_mipyme_financing, NaranjaRates, PaywayRates, ViumiRates};
pub use tables::{CoefficientTable, PromoRateTable, RateTable};
pub use loader::{load_rate_sheet, load_rate_sheet_from_reader};

// ============================================================================
// Fixed Parameters
// ============================================================================
// - VAT applies on top of commission and financing (not user editable)
// - Settlement buckets are the periods the acquirers pay out on

/// Value-added tax applied to commission and financing, in percent
pub const DEFAULT_VAT_PCT: f64 = 21.0;

/// Settlement periods (days) with commission entries
pub const SETTLEMENT_BUCKETS: [u32; 5] = [2, 5, 10, 20, 40];

/// Installment counts the MiPyME plan covers
pub const MIPYME_INSTALLMENTS: [u32; 2] = [3, 6];

/// Minimum installment count for the Macro promotion
pub const MACRO_PROMO_MIN_INSTALLMENTS: u32 = 3;

/// Whether `days` is one of the settlement buckets
pub fn is_settlement_bucket(days: u32) -> bool {
    SETTLEMENT_BUCKETS.contains(&days)
}

/// Every provider's tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSheet {
    pub viumi: ViumiRates,
    pub naranja: NaranjaRates,
    pub payway: PaywayRates,

    #[serde(default = "default_mipyme_financing")]
    pub mipyme: RateTable,
}

impl Default for RateSheet {
    fn default() -> Self {
        Self {
            viumi: ViumiRates::default(),
            naranja: NaranjaRates::default(),
            payway: PaywayRates::default(),
            mipyme: default_mipyme_financing(),
        }
    }
}

impl RateSheet {
    /// Built-in tables, constructed once per process
    pub fn standard() -> &'static RateSheet {
        static STANDARD: LazyLock<RateSheet> = LazyLock::new(RateSheet::default);
        &STANDARD
    }

    /// Check every entry is a non-negative finite percentage
    pub fn validate(&self) -> Result<()> {
        self.viumi.commission.validate("viumi.commission")?;
        self.viumi.financing.validate("viumi.financing")?;
        self.viumi.promo_commission.validate("viumi.promo_commission")?;
        self.naranja.commission.validate("naranja.commission")?;
        self.naranja.financing.validate("naranja.financing")?;
        self.payway.validate()?;
        self.mipyme.validate("mipyme")?;
        Ok(())
    }
}
