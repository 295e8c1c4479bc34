//! Transcript reorganisation.

use crate::completion::{Sampling, complete};
use crate::prompt::{PromptBuilder, PromptProfile};
use crate::text::split_content;
use tracing::{info, instrument};
use vidnote_config::{OrganizeConfig, VidnoteConfig};
use vidnote_core::CompletionOutcome;
use vidnote_interface::CompletionDriver;

/// Restructures raw transcripts into readable prose.
#[derive(Debug, Clone)]
pub struct ContentOrganizer<D> {
    driver: D,
    prompts: PromptBuilder,
    config: OrganizeConfig,
}

impl<D: CompletionDriver> ContentOrganizer<D> {
    /// Organizer configured from `[organize]`.
    pub fn new(driver: D, config: &VidnoteConfig) -> Self {
        Self {
            driver,
            prompts: PromptBuilder::from_config(&config.note),
            config: config.organize,
        }
    }

    /// Organise `content` in one call, falling back to the input on no output.
    #[instrument(skip(self, content), fields(phase = "organize", payload_len = content.chars().count()))]
    pub async fn organize(&self, content: &str) -> String {
        let profile = PromptProfile::Organize;
        let prompt = self.prompts.build(content, &profile);
        let sampling = Sampling::new(self.config.temperature, self.config.max_tokens);

        match complete(&self.driver, profile.phase(), &prompt, sampling).await {
            CompletionOutcome::Text(text) => text,
            CompletionOutcome::NoOutput { .. } => content.to_string(),
        }
    }

    /// Organise long content chunk by chunk, joining results with blank lines.
    ///
    /// Blank input returns an empty string without calling the driver.
    #[instrument(skip(self, content), fields(phase = "organize", payload_len = content.chars().count()))]
    pub async fn organize_long(&self, content: &str) -> String {
        let chunks = split_content(content, self.config.chunk_chars, self.config.overlap_chars);
        info!(chunks = chunks.len(), "Organizing content in chunks");

        let mut organized = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            info!(chunk = i + 1, total = chunks.len(), "Organizing chunk");
            let text = self.organize(chunk).await;
            if !text.trim().is_empty() {
                organized.push(text);
            }
        }
        organized.join("\n\n")
    }
}
