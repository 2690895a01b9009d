//! Loading plays and invoices from JSON.
//!
//! Plays are stored as an object keyed by play id:
//!
//! ```text
//! { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
//! ```
//!
//! Invoices carry the customer and the performances in statement order:
//!
//! ```text
//! { "customer": "BigCo", "performances": [ { "playID": "hamlet", "audience": 55 } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{BillingError, BillingResult};
use crate::models::{Invoice, PlayCatalog};

/// Loads a play catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> BillingResult<PlayCatalog> {
    let catalog: PlayCatalog = load_json(path.as_ref())?;
    info!(path = %path.as_ref().display(), plays = catalog.len(), "Loaded play catalog");
    Ok(catalog)
}

/// Loads an invoice from a JSON file.
pub fn load_invoice<P: AsRef<Path>>(path: P) -> BillingResult<Invoice> {
    let invoice: Invoice = load_json(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        customer = %invoice.customer,
        performances = invoice.performances.len(),
        "Loaded invoice"
    );
    Ok(invoice)
}

/// Parses a play catalog from JSON text.
///
/// # Example
///
/// ```
/// use theater_billing::data::parse_catalog;
///
/// let catalog = parse_catalog(r#"{"hamlet": {"name": "Hamlet", "type": "tragedy"}}"#).unwrap();
/// assert_eq!(catalog.lookup("hamlet").unwrap().name, "Hamlet");
/// ```
pub fn parse_catalog(content: &str) -> BillingResult<PlayCatalog> {
    parse_json(content, "<plays>")
}

/// Parses an invoice from JSON text.
pub fn parse_invoice(content: &str) -> BillingResult<Invoice> {
    parse_json(content, "<invoice>")
}

fn load_json<T: DeserializeOwned>(path: &Path) -> BillingResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| BillingError::DataNotFound {
        path: path_str.clone(),
    })?;

    parse_json(&content, &path_str)
}

fn parse_json<T: DeserializeOwned>(content: &str, path: &str) -> BillingResult<T> {
    serde_json::from_str(content).map_err(|e| BillingError::DataParseError {
        path: path.to_string(),
        message: e.to_string(),
    })
}
