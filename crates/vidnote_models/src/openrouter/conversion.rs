//! Conversions between vidnote request types and chat-completions DTOs.

use super::dto::{ChatMessage, ChatRequest, ChatResponse};
use vidnote_core::{GenerateRequest, GenerateResponse, Output};
use vidnote_error::{BuilderError, CompletionError, CompletionErrorKind, VidnoteResult};

/// Build the wire request. The request's own model wins over `default_model`.
pub fn to_chat_request(request: &GenerateRequest, default_model: &str) -> VidnoteResult<ChatRequest> {
    let messages = request
        .messages()
        .iter()
        .map(|message| {
            ChatMessage::builder()
                .role(*message.role())
                .content(message.content().clone())
                .build()
                .map_err(|e| BuilderError::from(format!("Failed to build chat message: {}", e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let model = request
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let chat_request = ChatRequest::builder()
        .model(model)
        .messages(messages)
        .temperature(*request.temperature())
        .max_tokens(*request.max_tokens())
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build chat request: {}", e)))?;

    Ok(chat_request)
}

/// Take the first choice, trimmed.
///
/// A missing choice or blank content is an [`CompletionErrorKind::EmptyResponse`];
/// a refusal is passed through as [`Output::Refusal`].
pub fn from_chat_response(response: &ChatResponse) -> VidnoteResult<GenerateResponse> {
    let Some(choice) = response.choices().first() else {
        return Err(CompletionError::new(CompletionErrorKind::EmptyResponse).into());
    };

    let message = choice.message();
    let text = message.content().as_deref().map(str::trim).unwrap_or_default();
    if !text.is_empty() {
        return Ok(GenerateResponse::from_text(text));
    }

    if let Some(refusal) = message.refusal() {
        return Ok(GenerateResponse::new(vec![Output::Refusal(refusal.clone())]));
    }

    Err(CompletionError::new(CompletionErrorKind::EmptyResponse).into())
}
