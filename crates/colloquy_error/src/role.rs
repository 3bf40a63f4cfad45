//! Role lookup error types.

/// Kinds of role errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RoleErrorKind {
    /// Tag does not name one of the known roles
    #[display("Unknown role tag: {:?}", _0)]
    UnknownTag(String),
}

/// Role error with location tracking.
///
/// # Examples
///
/// ```
/// use colloquy_error::{RoleError, RoleErrorKind};
///
/// let err = RoleError::new(RoleErrorKind::UnknownTag("moderator".to_string()));
/// assert!(format!("{}", err).contains("moderator"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Role Error: {} at line {} in {}", kind, line, file)]
pub struct RoleError {
    /// The kind of error that occurred
    pub kind: RoleErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RoleError {
    /// Create a new role error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RoleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an [`RoleErrorKind::UnknownTag`] error.
    #[track_caller]
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::new(RoleErrorKind::UnknownTag(tag.into()))
    }
}
