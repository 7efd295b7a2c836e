//! Error types for the auto-faking container.

use std::fmt;

/// Failures reported by the container.
///
/// Every failure surfaces to the direct caller; nothing is caught or retried
/// internally, and no operation silently substitutes a default value.
///
/// # Examples
///
/// ```rust
/// use autofaker::{AutoFaker, FakeError};
///
/// // Retrieving a type that was never registered is a reported condition.
/// let faker = AutoFaker::new();
/// match faker.get::<String>() {
///     Err(FakeError::ResolutionFailed(name)) => {
///         assert_eq!(name, "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub enum FakeError {
    /// A runtime-supplied input was unusable; carries the parameter name.
    ///
    /// Raised when a type-erased registry entry does not hold the payload
    /// shape its key promises, which can only happen through misuse of the
    /// non-generic [`FakerCore`](crate::FakerCore) API.
    InvalidArgument(&'static str),
    /// A `get` queried a type with no registered entry; carries the type name.
    ResolutionFailed(&'static str),
    /// The factory could not build the named type; carries the inner failure
    /// unchanged.
    ConstructionFailed(&'static str, Box<FakeError>),
}

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FakeError::InvalidArgument(param) => {
                write!(f, "Invalid argument: {}", param)
            }
            FakeError::ResolutionFailed(name) => {
                write!(f, "Cannot resolve the {} service", name)
            }
            FakeError::ConstructionFailed(name, source) => {
                write!(f, "Cannot construct {}: {}", name, source)
            }
        }
    }
}

impl std::error::Error for FakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FakeError::ConstructionFailed(_, source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Result type for container operations.
pub type FakeResult<T> = Result<T, FakeError>;
