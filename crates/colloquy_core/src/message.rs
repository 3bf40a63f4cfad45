//! Message types for conversation history.

use crate::Role;
use colloquy_error::{ColloquyError, RoleError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A chat message with a typed role.
///
/// # Examples
///
/// ```
/// use colloquy_core::{Message, Role};
///
/// let message = Message::new(Role::Function, "42").with_name("get_answer");
///
/// assert_eq!(*message.role(), Role::Function);
/// assert_eq!(message.content(), "42");
/// assert_eq!(message.name().as_deref(), Some("get_answer"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_new::new,
)]
#[setters(prefix = "with_")]
pub struct Message {
    /// The role of the message sender
    #[setters(skip)]
    role: Role,
    /// Text content of the message
    #[setters(skip)]
    #[new(into)]
    content: String,
    /// Function name for function messages, or an optional participant name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(strip_option, into)]
    #[new(default)]
    name: Option<String>,
}

impl Message {
    /// Converts into the untyped shape sent over the wire.
    pub fn to_wire(&self) -> WireMessage {
        WireMessage::from(self.clone())
    }
}

/// A message as received from the remote API, before its role is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    /// Raw role tag
    pub role: String,
    /// Text content of the message
    pub content: String,
    /// Optional name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<Message> for WireMessage {
    fn from(message: Message) -> Self {
        Self {
            role: message.role.as_tag().to_string(),
            content: message.content,
            name: message.name,
        }
    }
}

impl TryFrom<WireMessage> for Message {
    type Error = ColloquyError;

    /// Rejects messages whose role tag is not one of the known roles.
    #[instrument(skip_all, fields(role = %wire.role))]
    fn try_from(wire: WireMessage) -> Result<Self, Self::Error> {
        let Some(role) = Role::from_tag(&wire.role) else {
            warn!("Rejecting message with unknown role tag");
            return Err(RoleError::unknown_tag(wire.role).into());
        };

        debug!(%role, "Accepted wire message");
        Ok(Self {
            role,
            content: wire.content,
            name: wire.name,
        })
    }
}
