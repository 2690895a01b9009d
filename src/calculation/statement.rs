//! Invoice aggregation.
//!
//! This module walks an invoice in order, resolves each performance's play,
//! prices it, credits it, and sums the results into [`StatementData`].

use tracing::{debug, info, warn};

use crate::config::RuleBook;
use crate::error::{BillingError, BillingResult};
use crate::models::{Invoice, PlayCatalog, StatementData, StatementLine};

use super::{amount_for, credits_for};

/// Computes the statement for an invoice.
///
/// Lines follow invoice order. The first unresolved play id or unknown play
/// type aborts the computation; no partial statement is returned. Neither
/// the invoice nor the catalog is modified.
///
/// # Errors
///
/// - [`crate::error::BillingError::UnknownPlay`] for a play id missing from the catalog
/// - [`crate::error::BillingError::UnknownPlayType`] for a play of unknown type
/// - [`crate::error::BillingError::AmountOverflow`] or
///   [`crate::error::BillingError::TotalOverflow`] when amounts do not fit in `u64`
///
/// # Examples
///
/// ```
/// use theater_billing::calculation::compute_statement;
/// use theater_billing::config::RuleBook;
/// use theater_billing::models::{Invoice, Performance, Play, PlayCatalog};
///
/// let catalog = PlayCatalog::new()
///     .with_play("hamlet", Play::new("Hamlet", "tragedy"))
///     .with_play("as-like", Play::new("As You Like It", "comedy"))
///     .with_play("othello", Play::new("Othello", "tragedy"));
/// let invoice = Invoice::new(
///     "BigCo",
///     vec![
///         Performance::new("hamlet", 55),
///         Performance::new("as-like", 35),
///         Performance::new("othello", 40),
///     ],
/// );
///
/// let statement = compute_statement(&invoice, &catalog, &RuleBook::default()).unwrap();
/// assert_eq!(statement.total_amount, 173000);
/// assert_eq!(statement.total_credits, 47);
/// ```
pub fn compute_statement(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    rules: &RuleBook,
) -> BillingResult<StatementData> {
    let mut lines = Vec::with_capacity(invoice.performances.len());
    let mut total_amount: u64 = 0;
    let mut total_credits: u64 = 0;

    for performance in &invoice.performances {
        let play = catalog.lookup(&performance.play_id).inspect_err(|err| {
            warn!(customer = %invoice.customer, error = %err, "Play lookup failed");
        })?;

        let amount = amount_for(performance, play, &rules.pricing)?;
        let credits = credits_for(performance, play, &rules.credits)?;

        debug!(
            play_id = %performance.play_id,
            play_type = %play.play_type,
            audience = performance.audience,
            amount,
            credits,
            "Priced performance"
        );

        let overflow = || {
            warn!(customer = %invoice.customer, "Statement total overflow");
            BillingError::TotalOverflow {
                customer: invoice.customer.clone(),
            }
        };
        total_amount = total_amount.checked_add(amount).ok_or_else(overflow)?;
        total_credits = total_credits.checked_add(credits).ok_or_else(overflow)?;
        lines.push(StatementLine {
            play_id: performance.play_id.clone(),
            play_name: play.name.clone(),
            amount,
            audience: performance.audience,
            credits,
        });
    }

    info!(
        customer = %invoice.customer,
        performances = lines.len(),
        total_amount,
        total_credits,
        "Statement computed"
    );

    Ok(StatementData {
        customer: invoice.customer.clone(),
        lines,
        total_amount,
        total_credits,
    })
}
