//! Error types for the algorithm catalog

use thiserror::Error;

/// Result type alias using the catalog Error
pub type Result<T> = std::result::Result<T, Error>;

/// Catalog error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No category with the requested id
    #[error("Category {0} not found")]
    CategoryNotFound(String),

    /// The category exists but holds no algorithm with the requested id
    #[error("Algorithm {algorithm} not found")]
    AlgorithmNotFound {
        /// Category that was searched
        category: String,
        /// Algorithm id that was missing
        algorithm: String,
    },

    /// Catalog input violates a structural invariant
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl Error {
    /// Create a category not-found error
    pub fn category_not_found(category: impl Into<String>) -> Self {
        Self::CategoryNotFound(category.into())
    }

    /// Create an algorithm not-found error
    pub fn algorithm_not_found(category: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self::AlgorithmNotFound {
            category: category.into(),
            algorithm: algorithm.into(),
        }
    }

    /// Create an invalid catalog error
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }

    /// Whether this is one of the lookup misses (unknown category or algorithm)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_) | Self::AlgorithmNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_echo_the_id() {
        assert_eq!(
            Error::category_not_found("nope").to_string(),
            "Category nope not found"
        );
        assert_eq!(
            Error::algorithm_not_found("sorting", "nope").to_string(),
            "Algorithm nope not found"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::category_not_found("x").is_not_found());
        assert!(Error::algorithm_not_found("x", "y").is_not_found());
        assert!(!Error::invalid_catalog("empty").is_not_found());
    }
}
