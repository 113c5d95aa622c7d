//! Card financing rate engine
//!
//! Resolves commission and financing rates per card provider, picks the
//! cheapest provider on request, and grosses a cash price up to the amount
//! to charge and its installment value.

pub mod config;
pub mod display;
pub mod error;
pub mod provider;
pub mod quote;
pub mod rates;

pub use config::EngineConfig;
pub use error::{FinancingError, Result};
pub use provider::{PromoFlags, ProviderChoice, ProviderId, ProviderRates};
pub use quote::{
    quote, reference_twelve_installment_price, FlyerPrice, ProviderQuoteInput, ProviderQuoteResult,
    QuoteEngine,
};
pub use rates::RateSheet;
