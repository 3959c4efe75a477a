//! Policy domain data, input validation, and policy number allocation

mod data;
pub mod allocator;
pub mod validate;

pub use allocator::PolicyNumberAllocator;
pub use data::{Claim, Customer, PaymentMethod, PolicySelection, Province};
