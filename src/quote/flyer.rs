//! Flyer (cartola) price lines built on the reference price

use serde::Serialize;

use super::engine::QuoteEngine;
use super::reference::REFERENCE_INSTALLMENTS;
use crate::display::format_ars;
use crate::error::Result;

/// Prices printed for one product on a flyer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlyerPrice {
    pub cash_price: f64,
    /// Crossed-out "was" price: 12 reference installments
    pub reference_price: f64,
    pub installments: u32,
    pub installment_value: f64,
}

impl FlyerPrice {
    pub fn for_cash_price(engine: &QuoteEngine, cash_price: f64) -> Result<Self> {
        let reference_price = engine.reference_twelve_installment_price(cash_price)?;
        Ok(Self {
            cash_price,
            reference_price,
            installments: REFERENCE_INSTALLMENTS,
            installment_value: reference_price / REFERENCE_INSTALLMENTS as f64,
        })
    }

    /// Rounded, formatted lines in flyer order
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Antes {}", format_ars(self.reference_price)),
            format!("{} cuotas de {}", self.installments, format_ars(self.installment_value)),
            format!("Contado {}", format_ars(self.cash_price)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flyer_uses_reference_price() {
        let engine = QuoteEngine::standard();
        let flyer = FlyerPrice::for_cash_price(engine, 300_000.0).unwrap();

        assert_eq!(
            flyer.reference_price,
            engine.reference_twelve_installment_price(300_000.0).unwrap()
        );
        assert!((flyer.installment_value * 12.0 - flyer.reference_price).abs() < 1e-6);
        assert!(flyer.reference_price > flyer.cash_price);
    }

    #[test]
    fn test_flyer_lines() {
        let flyer = FlyerPrice {
            cash_price: 100_000.0,
            reference_price: 203_500.0,
            installments: 12,
            installment_value: 203_500.0 / 12.0,
        };
        let [was, cuotas, cash] = flyer.lines();
        assert_eq!(was, "Antes $ 203.500,00");
        assert_eq!(cuotas, "12 cuotas de $ 16.958,33");
        assert_eq!(cash, "Contado $ 100.000,00");
    }
}
