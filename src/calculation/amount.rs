//! Performance pricing.
//!
//! This module computes the charge for a single performance in cents. Each
//! genre has its own base amount, audience threshold, and per-person
//! surcharge; comedies also carry an over-threshold bonus and a charge for
//! every attendee.

use tracing::warn;

use crate::config::{ComedyRate, PricingRules, ThresholdRate};
use crate::error::{BillingError, BillingResult};
use crate::models::{Genre, Performance, Play};

/// Computes the charge for a performance of a play, in cents.
///
/// - Tragedy, History, Pastoral: `base + per_person * max(audience - threshold, 0)`
/// - Comedy: `base + (audience > threshold ? bonus + per_person * (audience - threshold) : 0)
///   + per_audience * audience`
///
/// An audience exactly at the threshold pays no surcharge.
///
/// # Errors
///
/// - [`BillingError::UnknownPlayType`] when the play's type is not a known
///   genre. No default amount is ever produced.
/// - [`BillingError::AmountOverflow`] when the charge does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use theater_billing::calculation::amount_for;
/// use theater_billing::config::PricingRules;
/// use theater_billing::models::{Performance, Play};
///
/// let rules = PricingRules::default();
/// let hamlet = Play::new("Hamlet", "tragedy");
///
/// assert_eq!(amount_for(&Performance::new("hamlet", 25), &hamlet, &rules).unwrap(), 40000);
/// assert_eq!(amount_for(&Performance::new("hamlet", 35), &hamlet, &rules).unwrap(), 45000);
/// ```
pub fn amount_for(
    performance: &Performance,
    play: &Play,
    rules: &PricingRules,
) -> BillingResult<u64> {
    let genre = play.genre().inspect_err(|err| {
        warn!(play_id = %performance.play_id, error = %err, "Cannot price performance");
    })?;

    amount_for_genre(genre, performance.audience, rules).ok_or_else(|| {
        warn!(play_id = %performance.play_id, audience = performance.audience, "Amount overflow");
        BillingError::AmountOverflow {
            play_id: performance.play_id.clone(),
        }
    })
}

/// Computes the charge for an audience of a given genre, in cents.
///
/// Returns `None` if the charge overflows `u64`.
pub fn amount_for_genre(genre: Genre, audience: u32, rules: &PricingRules) -> Option<u64> {
    match genre {
        Genre::Tragedy => threshold_amount(&rules.tragedy, audience),
        Genre::Comedy => comedy_amount(&rules.comedy, audience),
        Genre::History => threshold_amount(&rules.history, audience),
        Genre::Pastoral => threshold_amount(&rules.pastoral, audience),
    }
}

fn threshold_amount(rate: &ThresholdRate, audience: u32) -> Option<u64> {
    let excess = u64::from(audience.saturating_sub(rate.audience_threshold));
    rate.over_threshold_per_person
        .checked_mul(excess)?
        .checked_add(rate.base_amount)
}

fn comedy_amount(rate: &ComedyRate, audience: u32) -> Option<u64> {
    let mut amount = rate.base_amount;
    if audience > rate.audience_threshold {
        let excess = u64::from(audience - rate.audience_threshold);
        let surcharge = rate.over_threshold_per_person.checked_mul(excess)?;
        amount = amount
            .checked_add(rate.over_threshold_bonus)?
            .checked_add(surcharge)?;
    }
    rate.per_audience_amount
        .checked_mul(u64::from(audience))?
        .checked_add(amount)
}
