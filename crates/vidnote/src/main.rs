//! vidnote CLI binary.
//!
//! This binary provides command-line access to vidnote's functionality:
//! - Generate articles and notes from transcript files
//! - Organize raw transcripts
//! - Re-run assembly over existing documents

use clap::Parser;
use vidnote::{ObservabilityConfig, VidnoteConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, assemble, generate};

    // Parse command-line arguments
    let cli = Cli::parse();

    // .env may carry the API key; a missing file is fine
    let _ = dotenvy::dotenv();

    let observability = ObservabilityConfig::default()
        .with_log_level(if cli.verbose { "debug" } else { "info" })
        .with_json_logs(cli.json_logs)
        .with_span_export(cli.export_spans);
    init_observability_with_config(observability)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = VidnoteConfig::load_with(cli.config.as_deref())?;

    // Execute the requested command
    let output = match cli.command {
        Commands::Article {
            transcript,
            context,
        } => generate::article(&config, &transcript, context.into_context())
            .await?
            .into_string(),

        Commands::Note {
            transcript,
            images,
            combined,
            max_tokens,
        } => generate::note(&config, &transcript, &images, combined, max_tokens)
            .await?
            .into_string(),

        Commands::Organize {
            transcript,
            chunked,
        } => generate::organize(&config, &transcript, chunked).await?,

        Commands::AssembleArticle { input, context } => {
            assemble::article(&config, &input, &context.into_context())?.into_string()
        }

        Commands::AssembleNote {
            input,
            title,
            alt_titles,
            tags,
            images,
        } => assemble::note(&config, &input, &title, &alt_titles, &tags, &images)?.into_string(),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
