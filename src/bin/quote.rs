//! Quote card financing from the command line
//!
//! Prints a single quote, the installment plan table, or flyer price lines.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};

use financing_engine::config::{load_engine_config, EngineConfig};
use financing_engine::display::{format_ars, format_pct};
use financing_engine::rates::{is_settlement_bucket, load_rate_sheet, RateSheet};
use financing_engine::{
    FlyerPrice, PromoFlags, ProviderChoice, ProviderQuoteInput, ProviderQuoteResult, QuoteEngine,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON rate sheet replacing the built-in tables
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// JSON engine config (VAT, plan installment counts)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Command {
    /// Quote one installment plan
    Quote {
        #[command(flatten)]
        request: Request,

        /// Number of installments
        #[arg(long, short = 'n')]
        installments: u32,
    },
    /// Quote every configured installment plan
    Plans {
        #[command(flatten)]
        request: Request,
    },
    /// Flyer lines (reference 12 cuotas price) for one or more cash prices
    Flyer {
        /// Cash prices
        #[arg(required = true)]
        amounts: Vec<f64>,
    },
}

#[derive(Args)]
struct Request {
    /// Net (cash) amount
    #[arg(long, short = 'a')]
    amount: f64,

    /// viumi, naranja, payway or best
    #[arg(long, short = 'p', default_value = "best")]
    provider: ProviderChoice,

    /// Settlement period in days (2, 5, 10, 20, 40)
    #[arg(long, short = 's', default_value_t = 10)]
    settlement: u32,

    /// Apply the Banco Macro promotion
    #[arg(long)]
    macro_promo: bool,

    /// Apply the MiPyME plan
    #[arg(long)]
    mipyme: bool,
}

impl Request {
    fn flags(&self) -> PromoFlags {
        PromoFlags {
            macro_promo: self.macro_promo,
            mipyme_plan: self.mipyme,
        }
    }

    fn warn_unknown_settlement(&self) {
        if !is_settlement_bucket(self.settlement) {
            warn!(
                "Settlement of {} days has no commission bucket; commission resolves to 0",
                self.settlement
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rates = match &cli.rates {
        Some(path) => load_rate_sheet(path)
            .with_context(|| format!("Failed to load rate sheet {}", path.display()))?,
        None => RateSheet::default(),
    };
    let config = match &cli.config {
        Some(path) => load_engine_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    info!("Quoting with VAT {}%", config.vat_pct);
    let engine = QuoteEngine::new(rates, config).context("Invalid engine configuration")?;

    match cli.command {
        Command::Quote { request, installments } => {
            request.warn_unknown_settlement();
            let input = ProviderQuoteInput::new(
                request.amount,
                request.provider,
                installments,
                request.settlement,
            )
            .with_flags(request.flags());
            let result = engine.quote(&input).context("Quote failed")?;
            write_quotes(cli.format, &[result])
        }
        Command::Plans { request } => {
            request.warn_unknown_settlement();
            let plans = engine
                .installment_plans(request.amount, request.provider, request.settlement, request.flags())
                .context("Plan table failed")?;
            write_quotes(cli.format, &plans)
        }
        Command::Flyer { amounts } => {
            let flyers = amounts
                .iter()
                .map(|&amount| {
                    FlyerPrice::for_cash_price(&engine, amount)
                        .with_context(|| format!("Flyer price failed for {amount}"))
                })
                .collect::<Result<Vec<_>>>()?;
            write_flyers(cli.format, &flyers)
        }
    }
}

fn write_quotes(format: Format, quotes: &[ProviderQuoteResult]) -> Result<()> {
    match format {
        Format::Table => {
            println!(
                "{:<12} {:<7} {:>10} {:>10} {:>10} {:>16} {:>16}",
                "Provider", "Cuotas", "Comision", "Financ.", "Total+IVA", "Total", "Cuota"
            );
            for q in quotes {
                println!(
                    "{:<12} {:<7} {:>10} {:>10} {:>10} {:>16} {:>16}",
                    q.provider_name,
                    q.installments,
                    format_pct(q.commission_rate),
                    format_pct(q.financing_rate),
                    format_pct(q.total_rate_with_vat),
                    format_ars(q.gross),
                    format_ars(q.installment_value),
                );
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(io::stdout().lock(), quotes)?;
            println!();
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout().lock());
            for q in quotes {
                writer.serialize(q)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_flyers(format: Format, flyers: &[FlyerPrice]) -> Result<()> {
    match format {
        Format::Table => {
            for (i, flyer) in flyers.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                for line in flyer.lines() {
                    println!("{line}");
                }
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(io::stdout().lock(), flyers)?;
            println!();
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout().lock());
            for flyer in flyers {
                writer.serialize(flyer)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
