//! Chat-completions wire types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use vidnote_core::Role;

/// One message in a chat-completions request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Message role
    role: Role,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Creates a new builder for `ChatMessage`.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}

/// Body posted to `/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation, system instruction first
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Output cap in tokens
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// The assistant message inside a choice.
///
/// `content` is nullable on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Default)]
pub struct ChatChoiceMessage {
    /// Generated text
    #[serde(default)]
    content: Option<String>,
    /// Refusal message, when the model declined
    #[serde(default)]
    refusal: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Choice index
    #[serde(default)]
    index: u32,
    /// The generated message
    #[serde(default)]
    message: ChatChoiceMessage,
    /// Why generation stopped ("stop", "length", ...)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatUsage {
    /// Prompt tokens consumed
    #[serde(default)]
    prompt_tokens: u32,
    /// Completion tokens generated
    #[serde(default)]
    completion_tokens: u32,
    /// Sum of both
    #[serde(default)]
    total_tokens: u32,
}

/// Body returned from `/chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    /// Provider response id
    #[serde(default)]
    id: Option<String>,
    /// Model that served the request
    #[serde(default)]
    model: Option<String>,
    /// Completion choices
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token usage, if reported
    #[serde(default)]
    usage: Option<ChatUsage>,
}

/// An entry of `/models`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ModelEntry {
    /// Model identifier
    id: String,
}

/// Body returned from `/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ModelList {
    /// Available models
    #[serde(default)]
    data: Vec<ModelEntry>,
}
