//! Reference "12 cuotas" price used as the "was" price on flyers

use super::engine::QuoteEngine;
use super::input::ProviderQuoteInput;
use crate::error::Result;
use crate::provider::ProviderId;

pub const REFERENCE_PROVIDER: ProviderId = ProviderId::Viumi;
pub const REFERENCE_SETTLEMENT_DAYS: u32 = 10;
pub const REFERENCE_INSTALLMENTS: u32 = 12;

impl QuoteEngine {
    /// Gross price of 12 Viümi installments settled at 10 days, no promotions
    pub fn reference_twelve_installment_price(&self, net_amount: f64) -> Result<f64> {
        let input = ProviderQuoteInput::new(
            net_amount,
            REFERENCE_PROVIDER,
            REFERENCE_INSTALLMENTS,
            REFERENCE_SETTLEMENT_DAYS,
        );
        Ok(self.quote(&input)?.gross)
    }
}

/// Reference price on the standard engine
pub fn reference_twelve_installment_price(net_amount: f64) -> Result<f64> {
    QuoteEngine::standard().reference_twelve_installment_price(net_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinancingError;

    #[test]
    fn test_reference_price() {
        // (3.79 + 38.24) * 1.21 = 50.8563
        let price = reference_twelve_installment_price(10_000.0).unwrap();
        let expected = 10_000.0 / (1.0 - 0.508563);
        assert!((price - expected).abs() < 1e-6);
    }

    #[test]
    fn test_reference_price_rejects_bad_amount() {
        assert!(matches!(
            reference_twelve_installment_price(-1.0),
            Err(FinancingError::InvalidAmount(_))
        ));
    }
}
