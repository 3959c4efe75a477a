//! Batch premium quoting from a JSON policy selection
//!
//! Reads a `PolicySelection` from the given JSON file, prices it against
//! the rate table, and prints the quote breakdown as JSON on stdout.

use anyhow::{Context, Result};
use policy_intake::policy::PolicySelection;
use policy_intake::quote::QuoteEngine;
use policy_intake::rates::{load_rates, RateTable};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let selection_path = PathBuf::from(
        args.next()
            .context("usage: quote <selection.json> [rates.csv]")?,
    );
    let rates = match args.next() {
        Some(path) => {
            load_rates(&path).with_context(|| format!("failed to load rates from {path}"))?
        }
        None => RateTable::default(),
    };

    let raw = fs::read_to_string(&selection_path)
        .with_context(|| format!("failed to read {}", selection_path.display()))?;
    let selection: PolicySelection = serde_json::from_str(&raw)
        .with_context(|| format!("invalid policy selection in {}", selection_path.display()))?;

    let engine = QuoteEngine::new(rates);
    let quote = engine.quote(&selection);
    println!("{}", serde_json::to_string_pretty(&quote)?);
    Ok(())
}
