//! Statement data returned by the aggregator.
//!
//! Amounts are integer cents and credits are integer units; nothing here is
//! formatted for display. See [`crate::render`] for that.

use serde::{Deserialize, Serialize};

/// One billed performance on a statement.
///
/// # Example
///
/// ```
/// use theater_billing::models::StatementLine;
///
/// let line = StatementLine {
///     play_id: "hamlet".to_string(),
///     play_name: "Hamlet".to_string(),
///     amount: 65000,
///     audience: 55,
///     credits: 25,
/// };
/// assert_eq!(line.amount, 65000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Catalog id of the play.
    pub play_id: String,
    /// Display name of the play.
    pub play_name: String,
    /// Charge for the performance in cents.
    pub amount: u64,
    /// Number of attendees.
    pub audience: u32,
    /// Loyalty credits earned by the performance.
    pub credits: u64,
}

/// The computed statement for an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    /// Customer the statement is addressed to.
    pub customer: String,
    /// One line per performance, in invoice order.
    pub lines: Vec<StatementLine>,
    /// Sum of all line amounts in cents.
    pub total_amount: u64,
    /// Sum of all line credits.
    pub total_credits: u64,
}
