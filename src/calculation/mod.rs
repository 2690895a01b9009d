//! Calculation logic for the theater billing engine.
//!
//! This module contains the pricing of a single performance, the loyalty
//! credits it earns, and the aggregation of an invoice into statement data.
//! Pricing and credits are independent rule sets over the same genres.

mod amount;
mod credits;
mod statement;

pub use amount::{amount_for, amount_for_genre};
pub use credits::{credits_for, credits_for_genre};
pub use statement::compute_statement;
