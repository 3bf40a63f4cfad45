//! Role types for conversation participants.

use colloquy_error::RoleError;
use serde::{Deserialize, Serialize};

/// The participant a chat message is attributed to.
///
/// The set is closed: a `Role` can only be one of the four variants, and each
/// variant carries a fixed lowercase tag that is also its wire value.
///
/// # Examples
///
/// ```
/// use colloquy_core::Role;
///
/// assert_eq!(Role::from_tag("assistant"), Some(Role::Assistant));
/// assert_eq!(Role::from_tag("Assistant"), None);
/// assert_eq!(Role::System.as_tag(), "system");
///
/// // Display renders the tag
/// assert_eq!(format!("{}", Role::Function), "function");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages are from the human
    #[display("user")]
    User,
    /// Assistant messages are from the model
    #[display("assistant")]
    Assistant,
    /// Function messages carry the result of a function call
    #[display("function")]
    Function,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::System, Role::User, Role::Assistant, Role::Function];

    /// Looks up a role by its exact tag.
    ///
    /// Matching is case-sensitive with no trimming. Returns `None` for
    /// anything that is not one of the four tags; what to do about that is
    /// the caller's decision.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            "function" => Some(Role::Function),
            _ => None,
        }
    }

    /// Returns the tag sent on the wire for this role.
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Function => "function",
        }
    }

    /// True for [`Role::System`].
    pub const fn is_system(&self) -> bool {
        matches!(self, Role::System)
    }

    /// True for [`Role::User`].
    pub const fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }

    /// True for [`Role::Assistant`].
    pub const fn is_assistant(&self) -> bool {
        matches!(self, Role::Assistant)
    }

    /// True for [`Role::Function`].
    pub const fn is_function(&self) -> bool {
        matches!(self, Role::Function)
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    /// Strict parse: same lookup as [`Role::from_tag`], but unknown tags are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_tag(s).ok_or_else(|| RoleError::unknown_tag(s))
    }
}

impl TryFrom<&str> for Role {
    type Error = RoleError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_tag()
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_tag()
    }
}
