//! Chat role and message types for the Colloquy library.
//!
//! [`Role`] is the closed set of participants in a chat conversation. It is
//! embedded in [`Message`], which also defines what happens when a raw role
//! tag from the remote API is not recognized.

mod message;
mod observability;
mod role;

pub use message::{Message, WireMessage};
pub use observability::init_tracing;
pub use role::Role;
