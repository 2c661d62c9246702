//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its allowed range
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },

    /// Exactly one of two fields must be supplied
    ExactlyOneOf {
        first: &'static str,
        second: &'static str,
    },

    /// A child entry failed validation
    Entry {
        index: usize,
        source: Box<ValidationError>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, reason } => write!(f, "{} {}", field, reason),
            Self::ExactlyOneOf { first, second } => {
                write!(f, "exactly one of {} or {} must be set", first, second)
            }
            Self::Entry { index, source } => write!(f, "entries[{}]: {}", index, source),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Entry { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );
    }

    #[test]
    fn entry_error_names_index() {
        let err = ValidationError::Entry {
            index: 2,
            source: Box::new(ValidationError::ExactlyOneOf {
                first: "reps",
                second: "duration_seconds",
            }),
        };
        assert_eq!(
            err.to_string(),
            "entries[2]: exactly one of reps or duration_seconds must be set"
        );
    }
}
