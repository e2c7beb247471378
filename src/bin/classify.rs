use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use solana_tx_classifier::{ClassifyConfig, RawTransactionRecord, TransactionClassifier};

/// Classify enriched transaction records from a JSON file and print the
/// normalized transactions as JSON.
#[derive(Parser, Debug)]
#[command(name = "classify")]
struct Args {
    /// Path to a JSON file holding an array of enriched transaction records.
    input: PathBuf,

    /// Optional JSON config file (tip addresses, minimum tip lamports).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .compact()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<ClassifyConfig>(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ClassifyConfig::default(),
    };

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let records: Vec<RawTransactionRecord> =
        serde_json::from_str(&raw).context("input is not an array of transaction records")?;

    let classifier = TransactionClassifier::with_config(config);
    let normalized = classifier.classify_batch(&records);

    let output = if args.pretty {
        serde_json::to_string_pretty(&normalized)?
    } else {
        serde_json::to_string(&normalized)?
    };
    println!("{output}");

    Ok(())
}
