//! Day code inspection binary.
//!
//! # Usage
//!
//! ```bash
//! # Today's day code and beacon seed
//! daycode-inspect --secret-hex 00112233445566778899aabbccddeeff
//!
//! # A week starting at a given Unix timestamp, 30-day table
//! daycode-inspect --secret-hex 0011... --at 1600000000 --days 7 --horizon-days 30
//! ```

use std::io::Write;

use clap::Parser;
use daycode_core::{Clock, DEFAULT_HORIZON_DAYS, DayCodeConfig, SystemClock};
use daycode_crypto::Timestamp;
use daycode_inspect::{InspectError, InspectRequest, inspect, write_report};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Day code inspector
#[derive(Parser, Debug)]
#[command(name = "daycode-inspect")]
#[command(about = "Print day codes and beacon code seeds for a shared secret")]
#[command(version)]
struct Args {
    /// Shared secret, hex encoded
    #[arg(short, long)]
    secret_hex: String,

    /// Number of days the table covers
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
    horizon_days: usize,

    /// Unix timestamp (seconds) of the first reported day; defaults to now
    #[arg(short, long, allow_negative_numbers = true)]
    at: Option<i64>,

    /// Number of consecutive days to report
    #[arg(short, long, default_value = "1")]
    days: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let at = args.at.map_or_else(|| SystemClock::new().now(), Timestamp::from_unix_secs);
    tracing::info!(%at, days = args.days, horizon_days = args.horizon_days, "inspecting day codes");

    let request = InspectRequest {
        secret: hex::decode(args.secret_hex.trim()).map_err(InspectError::from)?,
        config: DayCodeConfig { horizon_days: args.horizon_days },
        at,
        days: args.days,
    };

    let rows = inspect(&request)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &rows)?;
    out.flush()?;

    Ok(())
}
