//! Error types for the Colloquy library.
//!
//! Every error records the file and line where it was created.

mod observability;
mod role;

pub use observability::ObservabilityError;
pub use role::{RoleError, RoleErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ColloquyErrorKind {
    /// Role lookup or parsing error
    Role(RoleError),
    /// Tracing subscriber setup error
    Observability(ObservabilityError),
}

impl std::fmt::Display for ColloquyErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColloquyErrorKind::Role(e) => write!(f, "{}", e),
            ColloquyErrorKind::Observability(e) => write!(f, "{}", e),
        }
    }
}

/// Colloquy error with kind discrimination.
///
/// # Examples
///
/// ```
/// use colloquy_error::{ColloquyError, ColloquyErrorKind, RoleError};
///
/// let err: ColloquyError = RoleError::unknown_tag("tool").into();
/// assert!(matches!(err.kind(), ColloquyErrorKind::Role(_)));
/// ```
#[derive(Debug)]
pub struct ColloquyError(Box<ColloquyErrorKind>);

impl ColloquyError {
    /// Create a new error from a kind.
    pub fn new(kind: ColloquyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ColloquyErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ColloquyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Colloquy Error: {}", self.0)
    }
}

impl std::error::Error for ColloquyError {}

impl<T> From<T> for ColloquyError
where
    T: Into<ColloquyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Colloquy operations.
pub type ColloquyResult<T> = std::result::Result<T, ColloquyError>;
