//! Core domain types for one customer policy entry

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canadian province and territory codes accepted on intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Province {
    On,
    Qc,
    Bc,
    Ab,
    Mb,
    Sk,
    Ns,
    Nb,
    Nl,
    Pe,
    Nt,
    Nu,
    Yt,
}

impl Province {
    /// All 13 valid codes, in the order staff see them in prompts
    pub const ALL: [Province; 13] = [
        Province::On,
        Province::Qc,
        Province::Bc,
        Province::Ab,
        Province::Mb,
        Province::Sk,
        Province::Ns,
        Province::Nb,
        Province::Nl,
        Province::Pe,
        Province::Nt,
        Province::Nu,
        Province::Yt,
    ];

    /// Parse a two-letter code, case-insensitively. No normalization
    /// beyond case folding.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "ON" => Some(Province::On),
            "QC" => Some(Province::Qc),
            "BC" => Some(Province::Bc),
            "AB" => Some(Province::Ab),
            "MB" => Some(Province::Mb),
            "SK" => Some(Province::Sk),
            "NS" => Some(Province::Ns),
            "NB" => Some(Province::Nb),
            "NL" => Some(Province::Nl),
            "PE" => Some(Province::Pe),
            "NT" => Some(Province::Nt),
            "NU" => Some(Province::Nu),
            "YT" => Some(Province::Yt),
            _ => None,
        }
    }

    /// Two-letter code as printed on records and receipts
    pub fn code(&self) -> &'static str {
        match self {
            Province::On => "ON",
            Province::Qc => "QC",
            Province::Bc => "BC",
            Province::Ab => "AB",
            Province::Mb => "MB",
            Province::Sk => "SK",
            Province::Ns => "NS",
            Province::Nb => "NB",
            Province::Nl => "NL",
            Province::Pe => "PE",
            Province::Nt => "NT",
            Province::Nu => "NU",
            Province::Yt => "YT",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How the customer settles the premium
///
/// The method only decides whether a down payment is collected up front;
/// the installment schedule itself is the same for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Full,
    Monthly,
    DownPay,
}

impl PaymentMethod {
    /// Parse an operator token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "full" => Some(PaymentMethod::Full),
            "monthly" => Some(PaymentMethod::Monthly),
            "down pay" | "downpay" => Some(PaymentMethod::DownPay),
            _ => None,
        }
    }

    /// Label printed on records and receipts
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Full => "Full",
            PaymentMethod::Monthly => "Monthly",
            PaymentMethod::DownPay => "Down Pay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A prior claim on file for the customer, display only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub number: String,
    /// Kept verbatim as entered
    pub date: String,
    pub amount: Decimal,
}

/// Customer identity and contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub province: Province,
    pub postal_code: String,
    pub phone_number: String,
}

/// Insurance selections for one customer entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySelection {
    /// Number of insured vehicles, always at least one
    pub vehicles: u32,
    pub extra_liability: bool,
    pub glass_coverage: bool,
    pub loaner_car: bool,
    pub payment: PaymentMethod,
    /// Present only when payment is DownPay
    #[serde(default)]
    pub down_payment: Option<Decimal>,
}
