//! Commands that call the completion service.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};
use vidnote::{
    ArticleGenerator, ContentOrganizer, Document, DocumentAssembler, Health, HealthStatus,
    NoteAssembly, NoteGenerator, OpenRouterClient, VideoContext, VidnoteConfig,
};

/// Read a transcript, rejecting blank files.
pub fn read_transcript(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;
    if content.trim().is_empty() {
        anyhow::bail!("Transcript {} is empty", path.display());
    }
    Ok(content)
}

/// Build the driver and probe it. A failed probe is only a warning.
async fn connect(config: &VidnoteConfig) -> Result<OpenRouterClient> {
    let client = OpenRouterClient::from_config(&config.model)?;
    match client.health().await {
        Ok(HealthStatus::Healthy) => debug!(model = %config.model.name, "Completion service reachable"),
        Ok(status) => warn!(status = ?status, "Completion service health check failed; continuing"),
        Err(e) => warn!(error = %e, "Completion service health check failed; continuing"),
    }
    Ok(client)
}

/// Generate an article and print it with its footer.
pub async fn article(config: &VidnoteConfig, transcript: &Path, context: VideoContext) -> Result<Document> {
    let content = read_transcript(transcript)?;
    let generator = ArticleGenerator::new(connect(config).await?, config);

    info!(title = %context.title(), "Generating article");
    generator
        .generate_document(&content, &context)
        .await
        .context("Article generation produced no output")
}

/// Generate a note and lay it out with headlines, images and tags.
pub async fn note(
    config: &VidnoteConfig,
    transcript: &Path,
    images: &[String],
    combined: bool,
    max_tokens: Option<u32>,
) -> Result<Document> {
    let content = read_transcript(transcript)?;
    let generator = NoteGenerator::new(connect(config).await?, config);

    let draft = match (combined, max_tokens) {
        (true, _) => generator.generate_combined(&content).await,
        (false, Some(limit)) => generator.generate_with_limit(&content, limit).await,
        (false, None) => generator.generate(&content).await,
    };
    if !draft.is_generated() {
        warn!("Note body was not generated; the transcript is used as the body");
    }

    let assembly = NoteAssembly {
        headlines: draft.headlines(),
        tags: draft.tags(),
        media: images,
    };
    Ok(DocumentAssembler::new(config.layout).assemble_note(draft.body(), &assembly))
}

/// Organize a transcript, optionally chunk by chunk.
pub async fn organize(config: &VidnoteConfig, transcript: &Path, chunked: bool) -> Result<String> {
    let content = read_transcript(transcript)?;
    let organizer = ContentOrganizer::new(connect(config).await?, config);

    let organized = if chunked {
        organizer.organize_long(&content).await
    } else {
        organizer.organize(&content).await
    };
    Ok(organized)
}
