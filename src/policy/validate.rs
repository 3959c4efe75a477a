//! Pure input validation predicates
//!
//! These reject malformed structured input before it enters a
//! `PolicySelection`. Nothing here has side effects; retry-on-failure
//! belongs to the interactive layer.

use super::{PaymentMethod, Province};
use rust_decimal::Decimal;

/// True iff the case-folded code is one of the 13 valid province codes.
pub fn valid_province(code: &str) -> bool {
    parse_province(code).is_some()
}

/// Typed counterpart of [`valid_province`].
pub fn parse_province(code: &str) -> Option<Province> {
    Province::from_code(code)
}

/// True iff the uppercased token is exactly "Y" or "N".
pub fn valid_yes_no(token: &str) -> bool {
    parse_yes_no(token).is_some()
}

/// Typed counterpart of [`valid_yes_no`]: Y maps to true, N to false.
pub fn parse_yes_no(token: &str) -> Option<bool> {
    match token.to_ascii_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

pub fn parse_payment_method(token: &str) -> Option<PaymentMethod> {
    PaymentMethod::from_token(token)
}

/// Vehicle counts must be whole numbers of at least one.
pub fn parse_vehicle_count(s: &str) -> Option<u32> {
    match s.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

/// Money fields (claim amounts, down payments) must parse as
/// non-negative decimals.
pub fn parse_money(s: &str) -> Option<Decimal> {
    let amount = s.trim().parse::<Decimal>().ok()?;
    if amount.is_sign_negative() {
        None
    } else {
        Some(amount)
    }
}
