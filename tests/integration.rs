//! Integration tests for the theater billing engine.
//!
//! This test suite loads plays, invoices, and the rule book from disk and
//! covers:
//! - The classic BigCo statement (tragedy and comedy)
//! - Every genre on one invoice
//! - Pricing threshold boundaries
//! - Error cases (unknown play, unknown play type)
//! - Rule book overrides

use theater_billing::calculation::{amount_for, compute_statement, credits_for};
use theater_billing::config::{RuleBook, RuleBookLoader};
use theater_billing::data::{load_catalog, load_invoice};
use theater_billing::error::BillingError;
use theater_billing::models::{Genre, Invoice, Performance, Play, PlayCatalog, StatementData};
use theater_billing::render;

const PLAYS: &str = "tests/fixtures/plays.json";

fn catalog() -> PlayCatalog {
    load_catalog(PLAYS).expect("Failed to load plays fixture")
}

fn rules() -> RuleBook {
    RuleBookLoader::load("./config/rules.yaml")
        .expect("Failed to load rule book")
        .into_rules()
}

fn statement_for(invoice_path: &str) -> Result<StatementData, BillingError> {
    let invoice = load_invoice(invoice_path).expect("Failed to load invoice fixture");
    compute_statement(&invoice, &catalog(), &rules())
}

// ==========================================================================
// Full statements
// ==========================================================================

#[test]
fn test_bigco_statement_renders_classic_text() {
    let statement = statement_for("tests/fixtures/invoice.json").unwrap();

    let expected = "Statement for BigCo\n\
                    \x20 Hamlet: $650.00 (55 seats)\n\
                    \x20 As You Like It: $580.00 (35 seats)\n\
                    \x20 Othello: $500.00 (40 seats)\n\
                    Amount owed is $1,730.00\n\
                    You earned 47 credits\n";
    assert_eq!(render::plain_text(&statement), expected);
}

#[test]
fn test_all_genres_statement() {
    let statement = statement_for("tests/fixtures/invoice_all_genres.json").unwrap();

    let amounts: Vec<u64> = statement.lines.iter().map(|l| l.amount).collect();
    let credits: Vec<u64> = statement.lines.iter().map(|l| l.credits).collect();

    assert_eq!(amounts, vec![40_000, 34_500, 45_000, 90_000]);
    assert_eq!(credits, vec![0, 3, 15, 30]);
    assert_eq!(statement.total_amount, 209_500);
    assert_eq!(statement.total_credits, 48);
}

#[test]
fn test_totals_equal_sum_of_per_performance_values() {
    let invoice = load_invoice("tests/fixtures/invoice_all_genres.json").unwrap();
    let catalog = catalog();
    let rules = rules();

    let mut expected_amount = 0;
    let mut expected_credits = 0;
    for performance in &invoice.performances {
        let play = catalog.lookup(&performance.play_id).unwrap();
        expected_amount += amount_for(performance, play, &rules.pricing).unwrap();
        expected_credits += credits_for(performance, play, &rules.credits).unwrap();
    }

    let statement = compute_statement(&invoice, &catalog, &rules).unwrap();
    assert_eq!(statement.total_amount, expected_amount);
    assert_eq!(statement.total_credits, expected_credits);
}

// ==========================================================================
// Reference scenarios
// ==========================================================================

fn single(play_id: &str, audience: u32) -> (u64, u64) {
    let invoice = Invoice::new("Scenario", vec![Performance::new(play_id, audience)]);
    let statement = compute_statement(&invoice, &catalog(), &rules()).unwrap();
    (statement.total_amount, statement.total_credits)
}

#[test]
fn test_scenario_tragedy_under_threshold() {
    assert_eq!(single("hamlet", 25), (40_000, 0));
}

#[test]
fn test_scenario_tragedy_over_threshold() {
    assert_eq!(single("hamlet", 35), (45_000, 5));
}

#[test]
fn test_scenario_comedy_under_threshold() {
    assert_eq!(single("as-like", 15), (34_500, 3));
}

#[test]
fn test_scenario_comedy_over_threshold() {
    assert_eq!(single("as-like", 25), (50_000, 5));
}

#[test]
fn test_scenario_pastoral_credits() {
    assert_eq!(single("as-you", 40).1, 30);
}

// ==========================================================================
// Threshold boundaries
// ==========================================================================

#[test]
fn test_pricing_threshold_boundaries_for_every_genre() {
    let rules = rules();
    let cases = [
        ("hamlet", rules.pricing.tragedy.audience_threshold),
        ("as-like", rules.pricing.comedy.audience_threshold),
        ("henry-v", rules.pricing.history.audience_threshold),
        ("as-you", rules.pricing.pastoral.audience_threshold),
    ];

    for (play_id, threshold) in cases {
        let play = catalog().lookup(play_id).unwrap().clone();
        let at = amount_for(&Performance::new(play_id, threshold), &play, &rules.pricing).unwrap();
        let below =
            amount_for(&Performance::new(play_id, threshold - 1), &play, &rules.pricing).unwrap();
        let above =
            amount_for(&Performance::new(play_id, threshold + 1), &play, &rules.pricing).unwrap();

        let per_audience = if play.genre().unwrap() == Genre::Comedy {
            rules.pricing.comedy.per_audience_amount
        } else {
            0
        };

        // Reaching the threshold only adds the per-audience charge.
        assert_eq!(at - below, per_audience, "{play_id} at threshold");
        // One past it adds the surcharge (and the comedy bonus).
        assert!(above - at > per_audience, "{play_id} above threshold");
    }
}

#[test]
fn test_comedy_one_over_threshold_exact_amount() {
    // 30000 + 10000 + 500 * 1 + 300 * 21
    assert_eq!(single("as-like", 21).0, 46_800);
}

// ==========================================================================
// Error cases
// ==========================================================================

#[test]
fn test_unknown_play_produces_no_statement() {
    let result = statement_for("tests/fixtures/invoice_unknown_play.json");
    assert_eq!(
        result,
        Err(BillingError::UnknownPlay {
            play_id: "macbeth".to_string()
        })
    );
}

#[test]
fn test_unknown_play_type_produces_no_statement() {
    let result = statement_for("tests/fixtures/invoice_unknown_type.json");
    assert_eq!(
        result,
        Err(BillingError::UnknownPlayType {
            play_type: "opera".to_string()
        })
    );
}

#[test]
fn test_unknown_play_type_is_reported_for_a_catalog_built_in_code() {
    let catalog = PlayCatalog::new().with_play("cats", Play::new("Cats", "musical"));
    let invoice = Invoice::new("Fans", vec![Performance::new("cats", 10)]);

    let err = compute_statement(&invoice, &catalog, &RuleBook::default()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown play type: musical");
}

// ==========================================================================
// Rule book overrides
// ==========================================================================

#[test]
fn test_custom_rule_book_changes_only_its_genre() {
    let mut custom = rules();
    custom.pricing.tragedy.base_amount = 50_000;
    custom.credits.comedy.audience_divisor = 7;
    let custom = RuleBookLoader::from_rules(custom).unwrap().into_rules();

    let invoice = load_invoice("tests/fixtures/invoice.json").unwrap();
    let statement = compute_statement(&invoice, &catalog(), &custom).unwrap();

    assert_eq!(statement.lines[0].amount, 75_000);
    assert_eq!(statement.lines[1].amount, 58_000);
    // (35 - 30) + 35 / 7
    assert_eq!(statement.lines[1].credits, 10);
    assert_eq!(statement.total_credits, 25 + 10 + 10);
}
