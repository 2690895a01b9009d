//! Statement rendering.
//!
//! Turns computed [`StatementData`] into text for the customer. Amounts are
//! shown in US dollars; the calculation itself never deals with formatting.

use rust_decimal::Decimal;

use crate::models::StatementData;

/// Formats an amount in cents as US dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use theater_billing::render::usd;
///
/// assert_eq!(usd(173000), "$1,730.00");
/// assert_eq!(usd(5), "$0.05");
/// ```
pub fn usd(cents: u64) -> String {
    let dollars = Decimal::from(cents) / Decimal::ONE_HUNDRED;
    let fixed = format!("{:.2}", dollars);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}.{}", grouped, fraction)
}

/// Renders the plain-text statement.
///
/// ```text
/// Statement for BigCo
///   Hamlet: $650.00 (55 seats)
/// Amount owed is $1,730.00
/// You earned 47 credits
/// ```
pub fn plain_text(statement: &StatementData) -> String {
    let mut out = format!("Statement for {}\n", statement.customer);
    for line in &statement.lines {
        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            line.play_name,
            usd(line.amount),
            line.audience
        ));
    }
    out.push_str(&format!("Amount owed is {}\n", usd(statement.total_amount)));
    out.push_str(&format!("You earned {} credits\n", statement.total_credits));
    out
}

/// Renders the statement as pretty-printed JSON.
pub fn json(statement: &StatementData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(statement)
}
