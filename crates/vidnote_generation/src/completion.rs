//! One normalised call to a completion driver.

use crate::prompt::Prompt;
use crate::text::preview;
use tracing::{debug, error, warn};
use vidnote_core::{CompletionOutcome, GenerateRequest, Message, Role};
use vidnote_interface::CompletionDriver;

/// Sampling controls for one call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    /// Sampling temperature
    pub temperature: f32,
    /// Output cap in tokens
    pub max_tokens: u32,
}

impl Sampling {
    /// Sampling with the given temperature and cap.
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Send `prompt` and fold every failure into [`CompletionOutcome::NoOutput`].
///
/// Driver errors, empty replies and replies made only of whitespace all end
/// up as `NoOutput`; nothing is retried.
pub async fn complete<D>(driver: &D, phase: &str, prompt: &Prompt, sampling: Sampling) -> CompletionOutcome
where
    D: CompletionDriver + ?Sized,
{
    let request = match GenerateRequest::builder()
        .messages(vec![
            Message::new(Role::System, prompt.system().as_str()),
            Message::new(Role::User, prompt.user().as_str()),
        ])
        .temperature(sampling.temperature)
        .max_tokens(sampling.max_tokens)
        .build()
    {
        Ok(request) => request,
        Err(e) => {
            error!(phase, error = %e, "Failed to build completion request");
            return CompletionOutcome::no_output(e.to_string());
        }
    };

    debug!(
        phase,
        provider = driver.provider_name(),
        model = driver.model_name(),
        payload_len = prompt.user().chars().count(),
        temperature = sampling.temperature,
        max_tokens = sampling.max_tokens,
        "Requesting completion"
    );

    match driver.generate(&request).await {
        Ok(response) => {
            let outcome = CompletionOutcome::from_text(response.text());
            match &outcome {
                CompletionOutcome::Text(text) => debug!(
                    phase,
                    payload_len = text.chars().count(),
                    preview = %preview(text),
                    "Completion received"
                ),
                CompletionOutcome::NoOutput { reason } => {
                    warn!(phase, reason = %reason, "Completion returned no usable text")
                }
            }
            outcome
        }
        Err(e) => {
            error!(
                phase,
                provider = driver.provider_name(),
                error = %e,
                "Completion failed"
            );
            CompletionOutcome::no_output(e.to_string())
        }
    }
}
