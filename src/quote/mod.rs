//! Premium, tax, and monthly payment calculation

mod engine;

pub use engine::{PremiumQuote, QuoteEngine};

use rust_decimal::{Decimal, RoundingStrategy};

// ============================================================================
// Payment schedule
// ============================================================================
// Every policy is billed over the same fixed schedule. The payment method
// only decides whether a down payment reduces the financed balance; the
// installment count never varies with it.

/// Number of equal monthly installments the balance is divided into
pub const INSTALLMENT_COUNT: u32 = 8;

/// Decimal places used for displayed money amounts
pub const MONEY_DP: u32 = 2;

/// Round a money amount for display, half away from zero.
///
/// Amounts accumulate exactly; this is applied only at display and
/// write-out boundaries, never between intermediate steps.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a money amount as dollars with two decimals.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", round_money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(221)), dec!(221));
    }

    #[test]
    fn test_format_money_pads_two_decimals() {
        assert_eq!(format_money(dec!(1921)), "$1921.00");
        assert_eq!(format_money(dec!(242.5)), "$242.50");
        assert_eq!(format_money(dec!(0)), "$0.00");
    }
}
