//! Error types for galsim
//!
//! Construction and configuration problems surface as [`SimError`] at the
//! call site. Numerical degeneracies (coincident bodies, zero-magnitude
//! normalization) are never errors: the force sum skips them or the
//! non-finite values propagate, as documented on the operations themselves.

use thiserror::Error;

/// Result type alias for galsim operations
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A component list did not have the required arity
    #[error("{what}: expected {expected} components, found {found}")]
    BadShape {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A required entity field was absent in the configuration
    #[error("missing required field `{what}`")]
    MissingField { what: &'static str },

    /// Scenario YAML could not be parsed
    #[error("scenario parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Scenario file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
