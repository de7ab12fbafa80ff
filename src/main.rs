// =============================================================================
// marketmood — offline sentiment index runner
// =============================================================================
//
// Loads two daily price-history CSVs (equity benchmark, bond benchmark),
// runs the composite index engine over the full history, and writes the
// resulting record array as pretty JSON to a file or stdout.
//
// Usage:
//   marketmood <equity.csv> <bond.csv> [out.json]
//
// An optional MARKETMOOD_CONFIG env var points at a JSON engine config
// (window lengths, degenerate-strength fallback); defaults otherwise.

use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use marketmood::{config::EngineConfig, engine::IndexEngine, series};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (equity_path, bond_path, out_path) = match args.as_slice() {
        [e, b] => (e.clone(), b.clone(), None),
        [e, b, o] => (e.clone(), b.clone(), Some(o.clone())),
        _ => bail!("usage: marketmood <equity.csv> <bond.csv> [out.json]"),
    };

    let config = match std::env::var("MARKETMOOD_CONFIG") {
        Ok(path) => EngineConfig::load(&path).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load engine config, using defaults");
            EngineConfig::default()
        }),
        Err(_) => EngineConfig::default(),
    };

    let equity = series::load_price_csv(&equity_path)?;
    let bond = series::load_price_csv(&bond_path)?;
    info!(
        equity_days = equity.len(),
        bond_days = bond.len(),
        "price history loaded"
    );

    let records = IndexEngine::new(config).compute(&equity, &bond)?;
    info!(records = records.len(), "sentiment index computed");

    if let Some(last) = records.last() {
        info!(
            date = %last.date,
            composite = last.composite,
            momentum = last.momentum,
            strength = last.strength,
            safe_haven = last.safe_haven,
            "latest reading"
        );
    }

    match out_path {
        Some(path) => {
            series::write_records_json(&records, &path)?;
            info!(path = %path, "index written");
        }
        None => println!("{}", series::records_to_json(&records)?),
    }

    Ok(())
}
