//! Commission and financing resolution for a single provider
//!
//! Resolvers read the tables as they are: a single installment is not
//! special-cased here except where a provider's own pricing says so
//! (Payway). Cash quotes are zeroed by the quote engine before any
//! resolver runs.

use super::{PromoFlags, ProviderId};
use crate::rates::{
    NaranjaRates, PaywayRates, RateSheet, RateTable, ViumiRates, MACRO_PROMO_MIN_INSTALLMENTS,
    MIPYME_INSTALLMENTS,
};

/// Rates resolved for one provider, in percentage points before VAT
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProviderRates {
    pub commission: f64,
    pub financing: f64,
}

impl ProviderRates {
    /// Commission plus financing, before VAT
    pub fn total(&self) -> f64 {
        self.commission + self.financing
    }
}

/// MiPyME financing when the plan is selected and covers `installments`
fn mipyme_override(mipyme: &RateTable, installments: u32, flags: PromoFlags) -> Option<f64> {
    if flags.mipyme_plan && MIPYME_INSTALLMENTS.contains(&installments) {
        Some(mipyme.get_rate(installments))
    } else {
        None
    }
}

impl ViumiRates {
    pub fn resolve(
        &self,
        mipyme: &RateTable,
        settlement_days: u32,
        installments: u32,
        flags: PromoFlags,
    ) -> ProviderRates {
        let commission = self.commission.get_rate(settlement_days);

        // The Macro promotion replaces the surcharge instead of stacking on it
        if flags.macro_promo && installments >= MACRO_PROMO_MIN_INSTALLMENTS {
            if let Some(promo) = self.promo_commission.entry(installments, settlement_days) {
                return ProviderRates {
                    commission: promo,
                    financing: 0.0,
                };
            }
        }

        let financing = mipyme_override(mipyme, installments, flags)
            .unwrap_or_else(|| self.financing.get_rate(installments));

        ProviderRates { commission, financing }
    }
}

impl NaranjaRates {
    pub fn resolve(
        &self,
        mipyme: &RateTable,
        settlement_days: u32,
        installments: u32,
        flags: PromoFlags,
    ) -> ProviderRates {
        let commission = self.commission.get_rate(settlement_days);
        let financing = mipyme_override(mipyme, installments, flags)
            .unwrap_or_else(|| self.financing.get_rate(installments));

        ProviderRates { commission, financing }
    }
}

impl PaywayRates {
    /// Settlement days do not affect Payway's flat commission
    pub fn resolve(&self, mipyme: &RateTable, installments: u32, flags: PromoFlags) -> ProviderRates {
        let financing = match mipyme_override(mipyme, installments, flags) {
            Some(rate) => rate,
            None if installments == 1 => 0.0,
            None => self.financing_from_coefficient(installments),
        };

        ProviderRates {
            commission: self.commission,
            financing,
        }
    }
}

impl RateSheet {
    /// Resolve commission and financing for `provider`
    pub fn resolve(
        &self,
        provider: ProviderId,
        settlement_days: u32,
        installments: u32,
        flags: PromoFlags,
    ) -> ProviderRates {
        match provider {
            ProviderId::Viumi => self.viumi.resolve(&self.mipyme, settlement_days, installments, flags),
            ProviderId::Naranja => self.naranja.resolve(&self.mipyme, settlement_days, installments, flags),
            ProviderId::Payway => self.payway.resolve(&self.mipyme, installments, flags),
        }
    }
}
