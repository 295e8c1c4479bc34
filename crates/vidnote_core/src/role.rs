//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a message in a completion request.
///
/// # Examples
///
/// ```
/// use vidnote_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "System");
/// assert_eq!(Role::User.as_wire(), "user");
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
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixes the assistant's persona and rules
    System,
    /// The instruction carrying the content payload
    User,
    /// Model-authored text
    Assistant,
}

impl Role {
    /// Lowercase name used by chat-completion APIs.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
