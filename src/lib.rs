//! Policy intake and premium quoting system for One Stop Insurance
//!
//! Records new customer auto policies from interactive input, computes the
//! premium, HST, and an eight-installment payment schedule, appends each
//! completed record to a flat text log, and renders a customer receipt.

pub mod intake;
pub mod policy;
pub mod quote;
pub mod rates;
pub mod receipt;
pub mod records;

pub use quote::{PremiumQuote, QuoteEngine};
pub use rates::RateTable;
