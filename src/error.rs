//! Error type shared by the rate loaders and the quote engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinancingError {
    #[error("net amount must be a positive finite value, got {0}")]
    InvalidAmount(f64),

    #[error("installment count must be at least 1, got {0}")]
    InvalidInstallments(u32),

    /// The VAT-inclusive rate leaves nothing to charge on the gross amount
    #[error("rate exceeds chargeable amount: {rate:.4}% with VAT")]
    RateExceedsAmount { rate: f64 },

    #[error("unknown provider identifier: {0:?}")]
    UnknownProvider(String),

    #[error("invalid rate in {table} table for key {key}: {rate}")]
    InvalidRate {
        table: &'static str,
        key: String,
        rate: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FinancingError>;
