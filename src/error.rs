//! Error types for qail-values.
//!
//! The builder itself never fails. These errors only come out of the strict
//! helpers: [`Template::parse`](crate::template::Template::parse),
//! [`Expression::try_new`](crate::expression::Expression::try_new) and
//! [`ValuesConfig::from_toml_str`](crate::config::ValuesConfig::from_toml_str).

use thiserror::Error;

/// The main error type for qail-values operations.
#[derive(Debug, Error)]
pub enum ValuesError {
    /// Template slot count does not match what the caller asked for.
    #[error("Template error in '{template}': expected {expected} slot(s), found {found}")]
    Template {
        template: String,
        expected: usize,
        found: usize,
    },

    /// Configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ValuesError {
    /// Create a slot mismatch error for the given template text.
    pub fn slots(template: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::Template {
            template: template.into(),
            expected,
            found,
        }
    }
}

/// Result type alias for qail-values operations.
pub type ValuesResult<T> = Result<T, ValuesError>;
