//! Installment plan table: one quote per offered installment count

use super::engine::QuoteEngine;
use super::input::{ProviderQuoteInput, ProviderQuoteResult};
use crate::error::Result;
use crate::provider::{PromoFlags, ProviderChoice};

impl QuoteEngine {
    /// Quote every installment count in the engine config, ascending
    ///
    /// Fails on the first plan that cannot be quoted.
    pub fn installment_plans(
        &self,
        net_amount: f64,
        provider: impl Into<ProviderChoice>,
        settlement_days: u32,
        flags: PromoFlags,
    ) -> Result<Vec<ProviderQuoteResult>> {
        let provider = provider.into();
        let mut counts = self.config().plan_installments.clone();
        counts.sort_unstable();
        counts.dedup();

        counts
            .into_iter()
            .map(|installments| {
                let input = ProviderQuoteInput::new(net_amount, provider, installments, settlement_days)
                    .with_flags(flags);
                self.quote(&input)
            })
            .collect()
    }
}
