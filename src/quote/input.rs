//! Quote request and result types

use serde::{Deserialize, Serialize};

use crate::error::{FinancingError, Result};
use crate::provider::{PromoFlags, ProviderChoice, ProviderId, ProviderRates};

/// Label of a single-payment quote
pub const CASH_LABEL: &str = "Contado";

/// Parameters of one quote request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuoteInput {
    /// Cash price the merchant wants to receive
    pub net_amount: f64,
    pub provider: ProviderChoice,
    pub installments: u32,
    /// Days until the acquirer settles; unrecognized buckets resolve to zero commission
    pub settlement_days: u32,
    #[serde(default)]
    pub flags: PromoFlags,
}

impl ProviderQuoteInput {
    pub fn new(
        net_amount: f64,
        provider: impl Into<ProviderChoice>,
        installments: u32,
        settlement_days: u32,
    ) -> Self {
        Self {
            net_amount,
            provider: provider.into(),
            installments,
            settlement_days,
            flags: PromoFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: PromoFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.net_amount.is_finite() || self.net_amount <= 0.0 {
            return Err(FinancingError::InvalidAmount(self.net_amount));
        }
        if self.installments < 1 {
            return Err(FinancingError::InvalidInstallments(self.installments));
        }
        Ok(())
    }
}

/// Outcome of a quote; produced fresh on every call
///
/// All amounts and rates carry full precision. Round only when displaying.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderQuoteResult {
    /// Provider that priced the quote, `None` for cash
    pub provider: Option<ProviderId>,
    pub provider_name: &'static str,
    pub installments: u32,
    /// Commission before VAT, percentage points
    pub commission_rate: f64,
    /// Financing surcharge before VAT, percentage points
    pub financing_rate: f64,
    /// Commission plus financing with VAT, percentage points
    pub total_rate_with_vat: f64,
    /// Amount to charge so the merchant nets the cash price
    pub gross: f64,
    pub installment_value: f64,
}

impl ProviderQuoteResult {
    /// Single payment: no rates, gross equals net
    pub fn cash(net_amount: f64) -> Self {
        Self {
            provider: None,
            provider_name: CASH_LABEL,
            installments: 1,
            commission_rate: 0.0,
            financing_rate: 0.0,
            total_rate_with_vat: 0.0,
            gross: net_amount,
            installment_value: net_amount,
        }
    }

    pub fn rates(&self) -> ProviderRates {
        ProviderRates {
            commission: self.commission_rate,
            financing: self.financing_rate,
        }
    }

    pub fn is_cash(&self) -> bool {
        self.provider.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let ok = ProviderQuoteInput::new(1000.0, ProviderId::Viumi, 3, 2);
        assert!(ok.validate().is_ok());

        let zero = ProviderQuoteInput::new(0.0, ProviderId::Viumi, 3, 2);
        assert!(matches!(zero.validate(), Err(FinancingError::InvalidAmount(_))));

        let negative = ProviderQuoteInput::new(-10.0, ProviderChoice::Best, 3, 2);
        assert!(negative.validate().is_err());

        let nan = ProviderQuoteInput::new(f64::NAN, ProviderChoice::Best, 3, 2);
        assert!(nan.validate().is_err());

        let no_installments = ProviderQuoteInput::new(1000.0, ProviderId::Naranja, 0, 2);
        assert!(matches!(
            no_installments.validate(),
            Err(FinancingError::InvalidInstallments(0))
        ));
    }

    #[test]
    fn test_cash_result() {
        let cash = ProviderQuoteResult::cash(1500.0);
        assert!(cash.is_cash());
        assert_eq!(cash.provider_name, "Contado");
        assert_eq!(cash.gross, 1500.0);
        assert_eq!(cash.installment_value, 1500.0);
        assert_eq!(cash.rates().total(), 0.0);
    }

    #[test]
    fn test_input_from_json() {
        let input: ProviderQuoteInput = serde_json::from_str(
            r#"{"net_amount": 100.0, "provider": "best", "installments": 6, "settlement_days": 10}"#,
        )
        .unwrap();
        assert_eq!(input.provider, ProviderChoice::Best);
        assert_eq!(input.flags, PromoFlags::NONE);

        let input: ProviderQuoteInput = serde_json::from_str(
            r#"{"net_amount": 100.0, "provider": "naranja", "installments": 3, "settlement_days": 2,
                "flags": {"mipyme_plan": true}}"#,
        )
        .unwrap();
        assert_eq!(input.provider, ProviderChoice::Provider(ProviderId::Naranja));
        assert!(input.flags.mipyme_plan);
        assert!(!input.flags.macro_promo);
    }
}
