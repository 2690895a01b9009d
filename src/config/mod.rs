//! Rule book configuration for the theater billing engine.
//!
//! This module holds the pricing and credit constants for every genre and
//! loads them from a YAML rule book.
//!
//! # Example
//!
//! ```no_run
//! use theater_billing::config::RuleBookLoader;
//!
//! let rules = RuleBookLoader::load("./config/rules.yaml").unwrap().into_rules();
//! println!("Comedy threshold: {}", rules.pricing.comedy.audience_threshold);
//! ```

mod loader;
mod types;

pub use loader::RuleBookLoader;
pub use types::{
    ComedyRate, CreditRules, CreditThreshold, CreditWithBonus, PricingRules, RuleBook,
    ThresholdRate,
};
