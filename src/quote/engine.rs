//! Quote engine: provider selection, VAT uplift and gross-up

use std::sync::LazyLock;

use super::input::{ProviderQuoteInput, ProviderQuoteResult};
use crate::config::EngineConfig;
use crate::error::{FinancingError, Result};
use crate::provider::{PromoFlags, ProviderChoice, ProviderId, ProviderRates};
use crate::rates::RateSheet;

/// Stateless quote engine over an immutable rate sheet
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    rates: RateSheet,
    config: EngineConfig,
}

impl QuoteEngine {
    /// Engine over `rates` and `config`, both validated first
    pub fn new(rates: RateSheet, config: EngineConfig) -> Result<Self> {
        rates.validate()?;
        config.validate()?;
        Ok(Self { rates, config })
    }

    /// Engine over the built-in tables and default config
    pub fn standard() -> &'static QuoteEngine {
        static STANDARD: LazyLock<QuoteEngine> =
            LazyLock::new(|| QuoteEngine {
                rates: RateSheet::standard().clone(),
                config: EngineConfig::default(),
            });
        &STANDARD
    }

    /// Same tables with a different VAT
    pub fn with_vat(mut self, vat_pct: f64) -> Result<Self> {
        self.config.vat_pct = vat_pct;
        self.config.validate()?;
        Ok(self)
    }

    pub fn rates(&self) -> &RateSheet {
        &self.rates
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Quote one request
    pub fn quote(&self, input: &ProviderQuoteInput) -> Result<ProviderQuoteResult> {
        input.validate()?;

        if input.installments == 1 {
            return Ok(ProviderQuoteResult::cash(input.net_amount));
        }

        let (provider, rates) = match input.provider {
            ProviderChoice::Provider(provider) => (
                provider,
                self.rates
                    .resolve(provider, input.settlement_days, input.installments, input.flags),
            ),
            ProviderChoice::Best => {
                self.select_best(input.settlement_days, input.installments, input.flags)
            }
        };

        let total_rate_with_vat = self.total_rate_with_vat(rates);
        let gross = gross_up(input.net_amount, total_rate_with_vat)?;

        Ok(ProviderQuoteResult {
            provider: Some(provider),
            provider_name: provider.display_name(),
            installments: input.installments,
            commission_rate: rates.commission,
            financing_rate: rates.financing,
            total_rate_with_vat,
            gross,
            installment_value: gross / input.installments as f64,
        })
    }

    /// Cheapest provider with a positive total rate
    ///
    /// A provider whose tables give zero commission and zero financing is
    /// treated as not offering the plan. When no provider has a positive
    /// total the first declared provider is returned. Ties keep the earlier
    /// provider.
    pub fn select_best(
        &self,
        settlement_days: u32,
        installments: u32,
        flags: PromoFlags,
    ) -> (ProviderId, ProviderRates) {
        let mut best: Option<(ProviderId, ProviderRates)> = None;

        for provider in ProviderId::ALL {
            let rates = self.rates.resolve(provider, settlement_days, installments, flags);
            if rates.total() <= 0.0 {
                continue;
            }
            match best {
                Some((_, current)) if current.total() <= rates.total() => {}
                _ => best = Some((provider, rates)),
            }
        }

        best.unwrap_or_else(|| {
            let first = ProviderId::ALL[0];
            (first, self.rates.resolve(first, settlement_days, installments, flags))
        })
    }

    /// Commission plus financing, uplifted by VAT
    pub fn total_rate_with_vat(&self, rates: ProviderRates) -> f64 {
        rates.total() * (1.0 + self.config.vat_pct / 100.0)
    }
}

/// Amount to charge so that `net_amount` remains after the rate is taken off the gross
fn gross_up(net_amount: f64, total_rate_with_vat: f64) -> Result<f64> {
    if !total_rate_with_vat.is_finite() || total_rate_with_vat < 0.0 {
        return Err(FinancingError::InvalidRate {
            table: "total_with_vat",
            key: "quote".to_string(),
            rate: total_rate_with_vat,
        });
    }
    if total_rate_with_vat >= 100.0 {
        return Err(FinancingError::RateExceedsAmount {
            rate: total_rate_with_vat,
        });
    }
    Ok(net_amount / (1.0 - total_rate_with_vat / 100.0))
}

/// Quote on the standard engine
pub fn quote(input: &ProviderQuoteInput) -> Result<ProviderQuoteResult> {
    QuoteEngine::standard().quote(input)
}
