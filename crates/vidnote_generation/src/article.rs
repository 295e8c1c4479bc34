//! Long-form article generation.

use crate::assemble::DocumentAssembler;
use crate::completion::{Sampling, complete};
use crate::prompt::{PromptBuilder, PromptProfile};
use tracing::{info, instrument, warn};
use vidnote_config::VidnoteConfig;
use vidnote_core::{CompletionOutcome, Document, VideoContext};
use vidnote_interface::CompletionDriver;

/// Generates long-form articles through a completion driver.
///
/// # Examples
///
/// ```no_run
/// use vidnote_config::VidnoteConfig;
/// use vidnote_core::VideoContext;
/// use vidnote_generation::ArticleGenerator;
/// use vidnote_models::OpenRouterClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VidnoteConfig::load()?;
/// let generator = ArticleGenerator::new(OpenRouterClient::from_config(&config.model)?, &config);
/// let context = VideoContext::default().with_uploader("U");
/// if let Some(document) = generator.generate_document("转录内容", &context).await {
///     println!("{}", document);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArticleGenerator<D> {
    driver: D,
    prompts: PromptBuilder,
    sampling: Sampling,
    assembler: DocumentAssembler,
}

impl<D: CompletionDriver> ArticleGenerator<D> {
    /// Generator configured from `[article]`.
    pub fn new(driver: D, config: &VidnoteConfig) -> Self {
        Self {
            driver,
            prompts: PromptBuilder::from_config(&config.note),
            sampling: Sampling::new(config.article.temperature, config.article.max_tokens),
            assembler: DocumentAssembler::new(config.layout),
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Raw article text, or [`CompletionOutcome::NoOutput`]. Never fails.
    #[instrument(skip(self, content, context), fields(phase = "article", payload_len = content.chars().count(), provider = self.driver.provider_name()))]
    pub async fn generate(&self, content: &str, context: &VideoContext) -> CompletionOutcome {
        let profile = PromptProfile::Article { context };
        let prompt = self.prompts.build(content, &profile);
        let outcome = complete(&self.driver, profile.phase(), &prompt, self.sampling).await;

        match &outcome {
            CompletionOutcome::Text(text) => {
                info!(payload_len = text.chars().count(), "Article generated")
            }
            CompletionOutcome::NoOutput { reason } => {
                warn!(reason = %reason, "Article generation produced no result")
            }
        }
        outcome
    }

    /// Generated article with its metadata footer, or `None` on no output.
    pub async fn generate_document(&self, content: &str, context: &VideoContext) -> Option<Document> {
        let body = self.generate(content, context).await.into_text()?;
        Some(self.assembler.assemble_article(&body, context))
    }
}
