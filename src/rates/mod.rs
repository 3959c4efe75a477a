//! Company rate constants and their loading

pub mod loader;

pub use loader::{load_rates, load_rates_from_reader, RatesError};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rate constants loaded once at startup, immutable for the process lifetime
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Seed for the policy number allocator
    pub next_policy_number: u32,

    /// Premium for the first insured vehicle
    pub basic_premium: Decimal,

    /// Fractional discount applied to each additional vehicle's premium
    pub discount_rate: Decimal,

    /// Per-vehicle cost of extra liability coverage
    pub extra_liability_cost: Decimal,

    /// Per-vehicle cost of glass coverage
    pub glass_coverage_cost: Decimal,

    /// Per-vehicle cost of loaner car coverage
    pub loaner_car_cost: Decimal,

    /// HST rate applied once to the combined pretax total
    pub tax_rate: Decimal,

    /// Flat fee added to the balance before installment division
    pub monthly_processing_fee: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        // Current One Stop rate sheet, matching the shipped rates.csv
        Self {
            next_policy_number: 1944,
            basic_premium: dec!(869.00),
            discount_rate: dec!(0.25),
            extra_liability_cost: dec!(130.00),
            glass_coverage_cost: dec!(86.00),
            loaner_car_cost: dec!(58.00),
            tax_rate: dec!(0.15),
            monthly_processing_fee: dec!(39.99),
        }
    }
}
