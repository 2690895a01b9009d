//! Rule book types for pricing and loyalty credits.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from the YAML rule book. Each genre owns its constants so
//! pricing and credit rules can be tuned independently.

use serde::{Deserialize, Serialize};

/// Pricing constants for a genre billed as base plus per-person surcharge.
///
/// All amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRate {
    /// Fixed charge for every performance.
    pub base_amount: u64,
    /// Audience size above which the surcharge applies.
    pub audience_threshold: u32,
    /// Surcharge per attendee above the threshold.
    pub over_threshold_per_person: u64,
}

/// Pricing constants for comedies.
///
/// Comedies add a flat bonus when the threshold is exceeded and a charge
/// for every attendee regardless of the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComedyRate {
    /// Fixed charge for every performance.
    pub base_amount: u64,
    /// Audience size above which the surcharge and bonus apply.
    pub audience_threshold: u32,
    /// Surcharge per attendee above the threshold.
    pub over_threshold_per_person: u64,
    /// Flat amount added once the threshold is exceeded.
    pub over_threshold_bonus: u64,
    /// Charge per attendee, applied to the whole audience.
    pub per_audience_amount: u64,
}

/// Pricing rules for every genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Tragedy pricing.
    pub tragedy: ThresholdRate,
    /// Comedy pricing.
    pub comedy: ComedyRate,
    /// History pricing.
    pub history: ThresholdRate,
    /// Pastoral pricing.
    pub pastoral: ThresholdRate,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tragedy: ThresholdRate {
                base_amount: 40_000,
                audience_threshold: 30,
                over_threshold_per_person: 1_000,
            },
            comedy: ComedyRate {
                base_amount: 30_000,
                audience_threshold: 20,
                over_threshold_per_person: 500,
                over_threshold_bonus: 10_000,
                per_audience_amount: 300,
            },
            history: ThresholdRate {
                base_amount: 20_000,
                audience_threshold: 20,
                over_threshold_per_person: 1_000,
            },
            pastoral: ThresholdRate {
                base_amount: 40_000,
                audience_threshold: 20,
                over_threshold_per_person: 2_500,
            },
        }
    }
}

/// Credit rule: one credit per attendee above a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditThreshold {
    /// Audience size above which credits accrue.
    pub audience_threshold: u32,
}

/// Credit rule with an extra bonus of one credit per `divisor` attendees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditWithBonus {
    /// Audience size above which credits accrue.
    pub audience_threshold: u32,
    /// The whole audience is divided by this (rounding down) for the bonus.
    /// Must be non-zero.
    pub audience_divisor: u32,
}

/// Loyalty credit rules for every genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRules {
    /// Tragedy credits.
    pub tragedy: CreditThreshold,
    /// Comedy credits, with a bonus per `audience_divisor` attendees.
    pub comedy: CreditWithBonus,
    /// History credits.
    pub history: CreditThreshold,
    /// Pastoral credits, with a bonus per `audience_divisor` attendees.
    pub pastoral: CreditWithBonus,
}

impl Default for CreditRules {
    fn default() -> Self {
        Self {
            tragedy: CreditThreshold {
                audience_threshold: 30,
            },
            comedy: CreditWithBonus {
                audience_threshold: 30,
                audience_divisor: 5,
            },
            history: CreditThreshold {
                audience_threshold: 30,
            },
            pastoral: CreditWithBonus {
                audience_threshold: 30,
                audience_divisor: 2,
            },
        }
    }
}

/// The complete rule book: pricing and credit rules.
///
/// `RuleBook::default()` carries the standard theater rates; a YAML file can
/// override them through [`super::RuleBookLoader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBook {
    /// Pricing rules.
    pub pricing: PricingRules,
    /// Loyalty credit rules.
    pub credits: CreditRules,
}

impl RuleBook {
    /// Returns the credit bonus divisors with their dotted rule names.
    pub(crate) fn credit_divisors(&self) -> [(&'static str, u32); 2] {
        [
            (
                "credits.comedy.audience_divisor",
                self.credits.comedy.audience_divisor,
            ),
            (
                "credits.pastoral.audience_divisor",
                self.credits.pastoral.audience_divisor,
            ),
        ]
    }
}
