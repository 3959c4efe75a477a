//! Rate table loading from the company rates file
//!
//! The file carries one `name,value` row per constant, in the canonical
//! order: next_policy_number, basic_premium, discount_rate,
//! extra_liability_cost, glass_coverage_cost, loaner_car_cost, tax_rate,
//! monthly_processing_fee. A missing or malformed file is fatal at
//! startup; the program never quotes against a partial table.

use super::RateTable;
use log::info;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatesError {
    #[error("failed to open rates file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed rates file: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown rate constant `{0}`")]
    UnknownField(String),

    #[error("duplicate rate constant `{0}`")]
    DuplicateField(String),

    #[error("missing rate constant `{0}`")]
    MissingField(&'static str),

    #[error("rate constant `{name}` has invalid value `{value}`")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Deserialize)]
struct RateRow {
    name: String,
    value: String,
}

/// Load the rate table from a CSV file on disk.
pub fn load_rates(path: impl AsRef<Path>) -> Result<RateTable, RatesError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = load_rates_from_reader(file)?;
    info!(
        "loaded rate table from {} (next policy number {})",
        path.display(),
        table.next_policy_number
    );
    Ok(table)
}

/// Load the rate table from any reader. Every constant must appear exactly
/// once; unknown names are rejected rather than skipped.
pub fn load_rates_from_reader<R: Read>(reader: R) -> Result<RateTable, RatesError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut next_policy_number: Option<u32> = None;
    let mut basic_premium = None;
    let mut discount_rate = None;
    let mut extra_liability_cost = None;
    let mut glass_coverage_cost = None;
    let mut loaner_car_cost = None;
    let mut tax_rate = None;
    let mut monthly_processing_fee = None;

    for row in rdr.deserialize() {
        let row: RateRow = row?;
        match row.name.as_str() {
            "next_policy_number" => {
                if next_policy_number.is_some() {
                    return Err(RatesError::DuplicateField(row.name));
                }
                let seed = row.value.parse::<u32>().map_err(|_| RatesError::InvalidValue {
                    name: "next_policy_number",
                    value: row.value.clone(),
                })?;
                next_policy_number = Some(seed);
            }
            "basic_premium" => put("basic_premium", &mut basic_premium, &row.value)?,
            "discount_rate" => put("discount_rate", &mut discount_rate, &row.value)?,
            "extra_liability_cost" => {
                put("extra_liability_cost", &mut extra_liability_cost, &row.value)?
            }
            "glass_coverage_cost" => {
                put("glass_coverage_cost", &mut glass_coverage_cost, &row.value)?
            }
            "loaner_car_cost" => put("loaner_car_cost", &mut loaner_car_cost, &row.value)?,
            "tax_rate" => put("tax_rate", &mut tax_rate, &row.value)?,
            "monthly_processing_fee" => {
                put("monthly_processing_fee", &mut monthly_processing_fee, &row.value)?
            }
            _ => return Err(RatesError::UnknownField(row.name)),
        }
    }

    Ok(RateTable {
        next_policy_number: next_policy_number
            .ok_or(RatesError::MissingField("next_policy_number"))?,
        basic_premium: basic_premium.ok_or(RatesError::MissingField("basic_premium"))?,
        discount_rate: discount_rate.ok_or(RatesError::MissingField("discount_rate"))?,
        extra_liability_cost: extra_liability_cost
            .ok_or(RatesError::MissingField("extra_liability_cost"))?,
        glass_coverage_cost: glass_coverage_cost
            .ok_or(RatesError::MissingField("glass_coverage_cost"))?,
        loaner_car_cost: loaner_car_cost.ok_or(RatesError::MissingField("loaner_car_cost"))?,
        tax_rate: tax_rate.ok_or(RatesError::MissingField("tax_rate"))?,
        monthly_processing_fee: monthly_processing_fee
            .ok_or(RatesError::MissingField("monthly_processing_fee"))?,
    })
}

fn put(name: &'static str, slot: &mut Option<Decimal>, raw: &str) -> Result<(), RatesError> {
    if slot.is_some() {
        return Err(RatesError::DuplicateField(name.to_string()));
    }
    let value = raw.parse::<Decimal>().map_err(|_| RatesError::InvalidValue {
        name,
        value: raw.to_string(),
    })?;
    *slot = Some(value);
    Ok(())
}
