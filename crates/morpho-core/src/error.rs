//! Error types for Morpho operations.
//!
//! Only misuse is reported as an error. Degenerate inputs (a genome that
//! matches no target sequence, a flat fitness landscape, a genome without
//! break symbols) are absorbed by the algorithms themselves.

use thiserror::Error;

/// Result type for Morpho operations.
pub type Result<T> = std::result::Result<T, MorphoError>;

/// Errors that can occur during Morpho operations.
#[derive(Debug, Clone, Error)]
pub enum MorphoError {
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Population history errors.
    #[error("History error: {0}")]
    History(#[from] HistoryError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for MorphoError {
    fn from(e: std::io::Error) -> Self {
        MorphoError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for MorphoError {
    fn from(e: serde_json::Error) -> Self {
        MorphoError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// A symbol was given two roles in the alphabet.
    #[error("Symbol {symbol:?} is used both as {first} and as {second}")]
    SymbolConflict {
        symbol: char,
        first: String,
        second: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Errors reading a stored population history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    /// A header line whose generation number does not parse.
    #[error("Malformed generation header at line {line}: {text:?}")]
    MalformedHeader { line: usize, text: String },
    /// Genomes found before the first generation header.
    #[error("Genome at line {0} appears before any generation header")]
    OrphanGenome(usize),
}

// Convenience constructors
impl MorphoError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MorphoError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        MorphoError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn symbol_conflict(
        symbol: char,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        MorphoError::Config(ConfigError::SymbolConflict {
            symbol,
            first: first.into(),
            second: second.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_render_field_and_reason() {
        let err = MorphoError::invalid_config("population_size", "0", "must be positive");
        assert_eq!(
            err.to_string(),
            "Config error: Invalid value for population_size: 0 (must be positive)"
        );
    }

    #[test]
    fn out_of_range_renders_bounds() {
        let err = MorphoError::out_of_range("mutation_rate", 0.0, 1.0, 1.5);
        assert!(err.to_string().contains("mutation_rate out of range: 1.5"));
    }
}
