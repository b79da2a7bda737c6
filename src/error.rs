//! Error types for resource configuration.
//!
//! The regeneration engine itself never fails: it corrects bad parameters
//! instead of rejecting them. Errors only arise when loading or validating
//! a [`ResourceConfig`](crate::config::ResourceConfig).

use thiserror::Error;

/// Errors that can occur while building a resource from configuration.
///
/// # Examples
///
/// ```rust
/// use zzregen::RegenError;
///
/// let err = RegenError::InvalidBounds { min: 10, max: 5 };
/// assert_eq!(err.to_string(), "Invalid bounds: min 10 is greater than max 5");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegenError {
    /// The lower bound is above the upper bound.
    #[error("Invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i32, max: i32 },

    /// The configuration document could not be parsed.
    #[error("Invalid resource config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for RegenError {
    fn from(err: serde_json::Error) -> Self {
        RegenError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegenError::InvalidBounds { min: 3, max: 1 };
        assert!(err.to_string().contains("min 3"));
        assert!(err.to_string().contains("max 1"));
    }

    #[test]
    fn test_parse_error_from_json() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: RegenError = json_err.into();
        assert!(matches!(err, RegenError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid resource config"));
    }
}
