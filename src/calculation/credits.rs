//! Loyalty credit calculation.
//!
//! Credits are keyed on genre independently from pricing: every genre has
//! an explicit rule, so a new genre cannot silently inherit another's.

use tracing::warn;

use crate::config::{CreditRules, CreditThreshold, CreditWithBonus};
use crate::error::BillingResult;
use crate::models::{Genre, Performance, Play};

/// Computes the loyalty credits earned by a performance.
///
/// - Tragedy, History: `max(audience - threshold, 0)`
/// - Comedy, Pastoral: `max(audience - threshold, 0) + floor(audience / divisor)`
///
/// Both parts apply together for the bonus genres.
///
/// # Errors
///
/// Returns [`crate::error::BillingError::UnknownPlayType`] when the play's
/// type is not a known genre.
///
/// # Examples
///
/// ```
/// use theater_billing::calculation::credits_for;
/// use theater_billing::config::CreditRules;
/// use theater_billing::models::{Performance, Play};
///
/// let rules = CreditRules::default();
/// let play = Play::new("As You Like It", "pastoral");
///
/// // max(40 - 30, 0) + 40 / 2
/// assert_eq!(credits_for(&Performance::new("as-you", 40), &play, &rules).unwrap(), 30);
/// ```
pub fn credits_for(
    performance: &Performance,
    play: &Play,
    rules: &CreditRules,
) -> BillingResult<u64> {
    let genre = play.genre().inspect_err(|err| {
        warn!(play_id = %performance.play_id, error = %err, "Cannot credit performance");
    })?;

    Ok(credits_for_genre(genre, performance.audience, rules))
}

/// Computes the credits for an audience of a given genre.
///
/// Divisors are expected to be non-zero, which [`crate::config::RuleBookLoader`]
/// enforces. A zero divisor contributes no bonus.
pub fn credits_for_genre(genre: Genre, audience: u32, rules: &CreditRules) -> u64 {
    match genre {
        Genre::Tragedy => threshold_credits(&rules.tragedy, audience),
        Genre::Comedy => bonus_credits(&rules.comedy, audience),
        Genre::History => threshold_credits(&rules.history, audience),
        Genre::Pastoral => bonus_credits(&rules.pastoral, audience),
    }
}

fn threshold_credits(rule: &CreditThreshold, audience: u32) -> u64 {
    u64::from(audience.saturating_sub(rule.audience_threshold))
}

fn bonus_credits(rule: &CreditWithBonus, audience: u32) -> u64 {
    let excess = u64::from(audience.saturating_sub(rule.audience_threshold));
    let bonus = audience.checked_div(rule.audience_divisor).unwrap_or(0);
    excess + u64::from(bonus)
}
