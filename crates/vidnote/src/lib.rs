//! vidnote - video transcripts to publishable text
//!
//! vidnote takes the transcript of a video and asks a completion service to
//! rewrite it into one of two artifacts:
//!
//! - a long-form **article** followed by a metadata footer (source, link,
//!   platform, generation time)
//! - a short-form **note**, produced in two phases: headline candidates
//!   first, then a body conditioned on the primary headline, laid out with
//!   cover and inline image slots and a tag block
//!
//! Assembly is idempotent: feeding an assembled document back through the
//! assembler yields the same document, never a second footer or tag block.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vidnote::{ArticleGenerator, OpenRouterClient, VideoContext, VidnoteConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VidnoteConfig::load()?;
//!     let client = OpenRouterClient::from_config(&config.model)?;
//!     let generator = ArticleGenerator::new(client, &config);
//!
//!     let context = VideoContext::default().with_title("视频标题");
//!     if let Some(article) = generator.generate_document("转录内容", &context).await {
//!         println!("{}", article);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry (stdout exporter)
//! - `api` - enable tests that call the live completion API
//!
//! # Architecture
//!
//! - `vidnote_error` - Error types
//! - `vidnote_core` - Core data types (VideoContext, Headlines, Document, ...)
//! - `vidnote_interface` - CompletionDriver trait definition
//! - `vidnote_config` - Layered TOML configuration
//! - `vidnote_models` - OpenRouter completion driver
//! - `vidnote_generation` - Prompts, parsing, generation and assembly
//!
//! This crate (`vidnote`) re-exports everything for convenience.

pub use vidnote_config::*;
pub use vidnote_core::*;
pub use vidnote_error::*;
pub use vidnote_generation::*;
pub use vidnote_interface::*;
pub use vidnote_models::OpenRouterClient;

mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
