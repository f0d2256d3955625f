//! Chat message types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat request.
///
/// Requests are single-turn: one system instruction plus the current user
/// message, never earlier history.
///
/// # Examples
///
/// ```
/// use relay_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Hello!");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatMessage {
    /// The role of the message sender
    role: Role,
    /// Text content of the message
    content: String,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
