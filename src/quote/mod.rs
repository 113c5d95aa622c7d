//! Quote engine: one entry point behind the calculator, product widget and flyer

mod engine;
mod flyer;
mod input;
mod plans;
mod reference;

pub use engine::{quote, QuoteEngine};
pub use flyer::FlyerPrice;
pub use input::{ProviderQuoteInput, ProviderQuoteResult, CASH_LABEL};
pub use reference::{
    reference_twelve_installment_price, REFERENCE_INSTALLMENTS, REFERENCE_PROVIDER,
    REFERENCE_SETTLEMENT_DAYS,
};
