//! Error types for the theater billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while producing a statement.

use thiserror::Error;

/// The main error type for the billing engine.
///
/// Statement computation fails fast: the first unresolved play or unknown
/// play type aborts the whole invoice and no partial statement is produced.
///
/// # Example
///
/// ```
/// use theater_billing::error::BillingError;
///
/// let error = BillingError::UnknownPlay {
///     play_id: "macbeth".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown play: macbeth");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// A performance referenced a play id that is absent from the catalog.
    #[error("Unknown play: {play_id}")]
    UnknownPlay {
        /// The play id that could not be resolved.
        play_id: String,
    },

    /// A play carried a type outside the known genres.
    #[error("Unknown play type: {play_type}")]
    UnknownPlayType {
        /// The unrecognised type string.
        play_type: String,
    },

    /// A performance's charge does not fit in the amount type.
    #[error("Amount overflow pricing play: {play_id}")]
    AmountOverflow {
        /// The play id of the performance being priced.
        play_id: String,
    },

    /// Statement totals do not fit in the amount type.
    #[error("Statement total overflow for customer: {customer}")]
    TotalOverflow {
        /// The customer on the invoice.
        customer: String,
    },

    /// Rule book file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule book file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule book entry holds a value the engine cannot compute with.
    #[error("Invalid rule '{rule}': {message}")]
    InvalidRule {
        /// The dotted path of the offending rule.
        rule: String,
        /// What is wrong with it.
        message: String,
    },

    /// Input data file (plays or invoice) was not found.
    #[error("Data file not found: {path}")]
    DataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Input data could not be parsed.
    #[error("Failed to parse data '{path}': {message}")]
    DataParseError {
        /// The file path, or a label for in-memory input.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return BillingError.
pub type BillingResult<T> = Result<T, BillingError>;
