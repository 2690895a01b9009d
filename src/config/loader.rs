//! Rule book loading functionality.
//!
//! This module provides the [`RuleBookLoader`] type for loading pricing and
//! credit rules from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{BillingError, BillingResult};

use super::types::RuleBook;

/// Loads and provides access to a validated rule book.
///
/// # File Layout
///
/// ```text
/// pricing:
///   tragedy:  { base_amount: 40000, audience_threshold: 30, over_threshold_per_person: 1000 }
///   comedy:   { base_amount: 30000, audience_threshold: 20, over_threshold_per_person: 500,
///               over_threshold_bonus: 10000, per_audience_amount: 300 }
///   history:  { ... }
///   pastoral: { ... }
/// credits:
///   tragedy:  { audience_threshold: 30 }
///   comedy:   { audience_threshold: 30, audience_divisor: 5 }
///   history:  { audience_threshold: 30 }
///   pastoral: { audience_threshold: 30, audience_divisor: 2 }
/// ```
///
/// # Example
///
/// ```no_run
/// use theater_billing::config::RuleBookLoader;
///
/// let loader = RuleBookLoader::load("./config/rules.yaml")?;
/// println!("Tragedy base: {} cents", loader.rules().pricing.tragedy.base_amount);
/// # Ok::<(), theater_billing::error::BillingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuleBookLoader {
    rules: RuleBook,
}

impl RuleBookLoader {
    /// Loads a rule book from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `RuleBookLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks a field (`ConfigParseError`)
    /// - A credit divisor is zero (`InvalidRule`)
    pub fn load<P: AsRef<Path>>(path: P) -> BillingResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BillingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(path = %path_str, "Loaded rule book");
        Ok(loader)
    }

    /// Parses a rule book from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use theater_billing::config::{RuleBook, RuleBookLoader};
    ///
    /// let yaml = serde_yaml::to_string(&RuleBook::default()).unwrap();
    /// let loader = RuleBookLoader::from_yaml_str(&yaml).unwrap();
    /// assert_eq!(*loader.rules(), RuleBook::default());
    /// ```
    pub fn from_yaml_str(content: &str) -> BillingResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Wraps an already-built rule book after validating it.
    pub fn from_rules(rules: RuleBook) -> BillingResult<Self> {
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    fn parse(content: &str, path: &str) -> BillingResult<Self> {
        let rules: RuleBook =
            serde_yaml::from_str(content).map_err(|e| BillingError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::from_rules(rules)
    }

    fn validate(rules: &RuleBook) -> BillingResult<()> {
        for (rule, divisor) in rules.credit_divisors() {
            if divisor == 0 {
                return Err(BillingError::InvalidRule {
                    rule: rule.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the loaded rule book.
    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Consumes the loader and returns the rule book.
    pub fn into_rules(self) -> RuleBook {
        self.rules
    }
}
