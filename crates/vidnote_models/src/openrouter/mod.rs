//! OpenRouter chat-completions integration.

mod client;
mod conversion;
mod dto;

pub use client::OpenRouterClient;
pub use dto::{
    ChatChoice, ChatChoiceMessage, ChatMessage, ChatMessageBuilder, ChatRequest,
    ChatRequestBuilder, ChatResponse, ChatUsage, ModelEntry, ModelList,
};
