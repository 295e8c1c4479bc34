//! CLI command definitions.

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vidnote::VideoContext;

/// vidnote - turn video transcripts into articles and notes
#[derive(Parser, Debug)]
#[command(name = "vidnote")]
#[command(about = "Turn video transcripts into long-form articles and short-form notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans through OpenTelemetry
    #[arg(long, global = true)]
    pub export_spans: bool,

    /// Extra configuration file, applied over the bundled and user defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a long-form article with a metadata footer
    Article {
        /// Path to the transcript text file
        #[arg(long)]
        transcript: PathBuf,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Generate a short-form note (headlines, body, tags)
    Note {
        /// Path to the transcript text file
        #[arg(long)]
        transcript: PathBuf,

        /// Image for the note: cover first, then inline figures
        #[arg(long = "image")]
        images: Vec<String>,

        /// Ask for headlines and body in a single call
        #[arg(long)]
        combined: bool,

        /// Token cap for the body phase
        #[arg(long)]
        max_tokens: Option<u32>,
    },

    /// Restructure a raw transcript into readable prose
    Organize {
        /// Path to the transcript text file
        #[arg(long)]
        transcript: PathBuf,

        /// Split long transcripts and organize them chunk by chunk
        #[arg(long)]
        chunked: bool,
    },

    /// Re-run article assembly over existing text, replacing any old footer
    AssembleArticle {
        /// Path to the article text
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Re-run note assembly over existing text
    AssembleNote {
        /// Path to the note text
        #[arg(long)]
        input: PathBuf,

        /// Primary headline
        #[arg(long)]
        title: String,

        /// Alternative headline, in priority order
        #[arg(long = "alt-title")]
        alt_titles: Vec<String>,

        /// Tag, with or without the leading '#'
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Image: cover first, then inline figures
        #[arg(long = "image")]
        images: Vec<String>,
    },
}

/// Video metadata flags shared by article commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Video title
    #[arg(long)]
    pub title: Option<String>,

    /// Channel or author name
    #[arg(long)]
    pub uploader: Option<String>,

    /// Link to the original video
    #[arg(long)]
    pub url: Option<String>,

    /// Hosting platform
    #[arg(long)]
    pub platform: Option<String>,

    /// Generation timestamp; defaults to the current local time
    #[arg(long)]
    pub timestamp: Option<String>,
}

impl ContextArgs {
    /// Video context with defaults for every missing flag.
    pub fn into_context(self) -> VideoContext {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().format("%Y%m%d_%H%M%S").to_string());
        VideoContext::from_parts(
            self.title,
            self.uploader,
            self.url,
            self.platform,
            Some(timestamp),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_note_with_repeated_images() {
        let cli = Cli::try_parse_from([
            "vidnote",
            "note",
            "--transcript",
            "t.txt",
            "--image",
            "a.png",
            "--image",
            "b.png",
            "--combined",
        ])
        .unwrap();

        match cli.command {
            Commands::Note {
                transcript,
                images,
                combined,
                max_tokens,
            } => {
                assert_eq!(transcript, PathBuf::from("t.txt"));
                assert_eq!(images, vec!["a.png", "b.png"]);
                assert!(combined);
                assert_eq!(max_tokens, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "vidnote",
            "organize",
            "--transcript",
            "t.txt",
            "--chunked",
            "-v",
            "--json-logs",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Organize { chunked: true, .. }));
    }

    #[test]
    fn assemble_note_requires_title() {
        let result = Cli::try_parse_from(["vidnote", "assemble-note", "--input", "n.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn context_defaults_and_timestamp() {
        let context = ContextArgs {
            uploader: Some("U".to_string()),
            ..ContextArgs::default()
        }
        .into_context();

        assert_eq!(context.uploader(), "U");
        assert_eq!(context.title(), vidnote::DEFAULT_TITLE);
        assert_eq!(context.timestamp().len(), "20240101_120000".len());
        assert_eq!(context.timestamp().as_bytes()[8], b'_');
    }

    #[test]
    fn explicit_timestamp_is_kept() {
        let context = ContextArgs {
            timestamp: Some("2024-01-01".to_string()),
            ..ContextArgs::default()
        }
        .into_context();
        assert_eq!(context.timestamp(), "2024-01-01");
    }
}
