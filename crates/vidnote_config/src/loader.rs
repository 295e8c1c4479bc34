//! Loading and validating [`VidnoteConfig`].

use crate::{ArticleConfig, HeadlineRules, ModelConfig, NoteConfig, NoteLayout, OrganizeConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use vidnote_error::{ConfigError, VidnoteError, VidnoteResult};

const DEFAULT_CONFIG: &str = include_str!("../vidnote.toml");

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use vidnote_config::VidnoteConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VidnoteConfig::load()?;
/// println!("model: {}", config.model.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VidnoteConfig {
    /// Completion provider settings
    pub model: ModelConfig,
    /// Long-form article sampling
    pub article: ArticleConfig,
    /// Short-form note sampling
    pub note: NoteConfig,
    /// Headline acceptance rules
    pub headlines: HeadlineRules,
    /// Media placement in notes
    pub layout: NoteLayout,
    /// Transcript reorganisation
    pub organize: OrganizeConfig,
}

impl VidnoteConfig {
    /// Load with full precedence: env > explicit file > ./vidnote.toml > home > bundled.
    ///
    /// User files are optional and silently skipped when absent.
    pub fn load() -> VidnoteResult<Self> {
        Self::load_with(None)
    }

    /// Like [`VidnoteConfig::load`], adding a required explicit file.
    #[instrument(skip(path), fields(path = ?path.map(|p| p.display().to_string())))]
    pub fn load_with(path: Option<&Path>) -> VidnoteResult<Self> {
        debug!("Loading configuration with precedence: env > file > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults_builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vidnote/vidnote.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vidnote").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VIDNOTE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a single file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VidnoteResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::defaults_builder().add_source(File::from(path.as_ref())))
    }

    /// Bundled defaults overlaid with TOML text.
    pub fn from_toml_str(toml: &str) -> VidnoteResult<Self> {
        Self::finish(Self::defaults_builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn defaults_builder() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> VidnoteResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                VidnoteError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VidnoteError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        debug!(model = %config.model.name, "Configuration loaded");
        Ok(config)
    }

    /// Reject combinations that would make generation misbehave.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> VidnoteResult<()> {
        let headlines = &self.headlines;
        if headlines.min_chars > headlines.max_chars {
            return Err(ConfigError::new(format!(
                "headlines.min_chars ({}) exceeds headlines.max_chars ({})",
                headlines.min_chars, headlines.max_chars
            ))
            .into());
        }
        if headlines.max_candidates == 0 {
            return Err(ConfigError::new("headlines.max_candidates must be at least 1").into());
        }

        for (key, value) in [
            ("article.temperature", self.article.temperature),
            ("note.title_temperature", self.note.title_temperature),
            ("note.body_temperature", self.note.body_temperature),
            ("organize.temperature", self.organize.temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{} must be within [0, 2], got {}",
                    key, value
                ))
                .into());
            }
        }

        for (key, value) in [
            ("article.max_tokens", self.article.max_tokens),
            ("note.title_max_tokens", self.note.title_max_tokens),
            ("note.max_tokens", self.note.max_tokens),
            ("organize.max_tokens", self.organize.max_tokens),
        ] {
            if value == 0 {
                return Err(ConfigError::new(format!("{} must be positive", key)).into());
            }
        }

        if self.note.placeholder_title.trim().is_empty() {
            return Err(ConfigError::new("note.placeholder_title must not be blank").into());
        }

        if !(0.0..=1.0).contains(&self.layout.split_ratio) {
            return Err(ConfigError::new(format!(
                "layout.split_ratio must be within [0, 1], got {}",
                self.layout.split_ratio
            ))
            .into());
        }

        if self.organize.chunk_chars == 0 || self.organize.overlap_chars >= self.organize.chunk_chars
        {
            return Err(ConfigError::new(format!(
                "organize.overlap_chars ({}) must be smaller than a positive organize.chunk_chars ({})",
                self.organize.overlap_chars, self.organize.chunk_chars
            ))
            .into());
        }

        Ok(())
    }
}
