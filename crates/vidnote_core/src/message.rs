//! Message types for completion requests.

use crate::Role;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single text message in a completion request.
///
/// # Examples
///
/// ```
/// use vidnote_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Summarise this transcript");
/// assert_eq!(*message.role(), Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message author
    role: Role,
    /// Message text
    content: String,
}

impl Message {
    /// Create a message directly.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a new builder for `Message`.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
