//! Request and response types for text completion.

use crate::{Message, Output, Role};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One completion request: instructions plus sampling controls.
///
/// Built fresh for every call and never reused.
///
/// # Examples
///
/// ```
/// use vidnote_core::{GenerateRequest, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![])
///     .temperature(0.8f32)
///     .max_tokens(500u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.max_tokens(), Some(500));
/// assert!(request.system_instruction().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The messages to send, system instruction first
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0 by convention)
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier override; drivers fall back to their own model
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Text of the first system message, if any.
    pub fn system_instruction(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| *m.role() == Role::System)
            .map(|m| m.content().as_str())
    }

    /// Text of the last user message, if any.
    pub fn user_instruction(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| *m.role() == Role::User)
            .map(|m| m.content().as_str())
    }
}

/// What a completion service returned.
///
/// # Examples
///
/// ```
/// use vidnote_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::new(vec![
///     Output::Text("Hello".to_string()),
///     Output::Text(" world".to_string()),
/// ]);
/// assert_eq!(response.text(), "Hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// The generated outputs, in provider order
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Wrap a list of outputs.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self { outputs }
    }

    /// Shorthand for a single text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Output::Text(text.into())])
    }

    /// All text outputs concatenated; refusals are ignored.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                Output::Refusal(_) => None,
            })
            .collect()
    }
}
