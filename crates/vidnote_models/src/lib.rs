//! Completion service drivers for vidnote.
//!
//! The only provider shipped is OpenRouter, reached through its
//! OpenAI-compatible chat-completions endpoint. Any other endpoint speaking
//! the same protocol can be used by pointing `model.api_url` at it.
//!
//! # Example
//!
//! ```no_run
//! use vidnote_config::VidnoteConfig;
//! use vidnote_core::{GenerateRequest, Message, Role};
//! use vidnote_interface::CompletionDriver;
//! use vidnote_models::OpenRouterClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VidnoteConfig::load()?;
//! let client = OpenRouterClient::from_config(&config.model)?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::new(Role::User, "Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openrouter;

pub use openrouter::{
    ChatChoice, ChatChoiceMessage, ChatMessage, ChatMessageBuilder, ChatRequest,
    ChatRequestBuilder, ChatResponse, ChatUsage, ModelEntry, ModelList, OpenRouterClient,
};
