//! Error types for combinator application.
//!
//! The combinators themselves raise only one kind of error,
//! [`CombinatorError::ArityMismatch`], from arity-restricted functions.
//! The remaining variants exist so that wrapped functions have a uniform
//! way to fail; whatever they return travels unchanged through every
//! combinator back to the caller.

use std::fmt;

/// Raised when an arity-restricted function is called with the wrong
/// number of arguments.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::ArityMismatchError;
///
/// let error = ArityMismatchError { expected: 2, actual: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "arity mismatch: expected 2 arguments, received 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArityMismatchError {
    /// The arity the function was restricted to.
    pub expected: usize,
    /// The number of arguments actually supplied.
    pub actual: usize,
}

impl fmt::Display for ArityMismatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "arity mismatch: expected {} arguments, received {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for ArityMismatchError {}

/// Errors produced while applying a [`Function`](crate::function::Function).
///
/// # Examples
///
/// ```rust
/// use arity_combinators::CombinatorError;
///
/// let error = CombinatorError::arity_mismatch(2, 3);
/// assert!(error.is_arity_mismatch());
///
/// let error = CombinatorError::raised("division by zero");
/// assert_eq!(format!("{error}"), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinatorError {
    /// A restricted function received the wrong number of arguments.
    ArityMismatch(ArityMismatchError),
    /// A result that had to be spread into positional arguments was not a
    /// sequence.
    NotSpreadable {
        /// Debug rendering of the offending value.
        found: String,
    },
    /// A value accessor found a different kind of value than requested.
    TypeMismatch {
        /// The kind that was requested.
        expected: &'static str,
        /// The kind that was found.
        found: &'static str,
    },
    /// A failure raised by a wrapped function.
    Raised(String),
}

impl CombinatorError {
    /// Creates an [`ArityMismatch`](Self::ArityMismatch) error.
    pub const fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::ArityMismatch(ArityMismatchError { expected, actual })
    }

    /// Creates a [`NotSpreadable`](Self::NotSpreadable) error from the value
    /// that could not be spread.
    pub fn not_spreadable(value: &impl fmt::Debug) -> Self {
        Self::NotSpreadable {
            found: format!("{value:?}"),
        }
    }

    /// Creates a [`Raised`](Self::Raised) error with the given message.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }

    /// Returns `true` if this is an arity mismatch.
    pub const fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch(_))
    }
}

impl fmt::Display for CombinatorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch(error) => write!(formatter, "{error}"),
            Self::NotSpreadable { found } => {
                write!(formatter, "cannot spread {found} as an argument list")
            }
            Self::TypeMismatch { expected, found } => {
                write!(formatter, "type mismatch: expected {expected}, found {found}")
            }
            Self::Raised(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for CombinatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArityMismatch(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ArityMismatchError> for CombinatorError {
    fn from(error: ArityMismatchError) -> Self {
        Self::ArityMismatch(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_arity_mismatch_display() {
        let error = CombinatorError::arity_mismatch(1, 0);
        assert_eq!(
            format!("{error}"),
            "arity mismatch: expected 1 arguments, received 0"
        );
    }

    #[test]
    fn test_not_spreadable_display() {
        let error = CombinatorError::not_spreadable(&42);
        assert_eq!(format!("{error}"), "cannot spread 42 as an argument list");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = CombinatorError::TypeMismatch {
            expected: "int",
            found: "string",
        };
        assert_eq!(
            format!("{error}"),
            "type mismatch: expected int, found string"
        );
    }

    #[test]
    fn test_arity_mismatch_has_source() {
        let error = CombinatorError::arity_mismatch(2, 3);
        assert!(error.source().is_some());
        assert!(CombinatorError::raised("boom").source().is_none());
    }

    #[test]
    fn test_from_arity_mismatch_error() {
        let error: CombinatorError = ArityMismatchError {
            expected: 2,
            actual: 1,
        }
        .into();
        assert_eq!(error, CombinatorError::arity_mismatch(2, 1));
    }
}
