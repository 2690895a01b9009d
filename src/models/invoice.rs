//! Invoice and performance models.

use serde::{Deserialize, Serialize};

/// A single performance billed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Id of the performed play in the catalog.
    #[serde(rename = "playID")]
    pub play_id: String,
    /// Number of attendees.
    pub audience: u32,
}

impl Performance {
    /// Creates a performance of the given play.
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice: the performances to bill, in statement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer name printed on the statement.
    pub customer: String,
    /// Performances in the order they appear on the statement.
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Creates an invoice for a customer.
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}
