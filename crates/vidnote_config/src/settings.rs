//! Configuration sections.

use serde::{Deserialize, Serialize};

/// Which model to call and how to reach it.
///
/// ```toml
/// [model]
/// name = "google/gemini-pro"
/// api_url = "https://openrouter.ai/api/v1"
/// api_key_env = "OPENROUTER_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier sent with every request
    pub name: String,
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub api_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Sent as `X-Title` for provider attribution
    pub app_name: String,
    /// Sent as `HTTP-Referer` for provider attribution
    pub http_referer: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "google/gemini-pro".to_string(),
            api_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            app_name: "vidnote".to_string(),
            http_referer: "https://github.com".to_string(),
        }
    }
}

/// Sampling for the long-form article.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArticleConfig {
    /// Biased toward creativity
    pub temperature: f32,
    /// Generous output cap
    pub max_tokens: u32,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 4000,
        }
    }
}

/// Sampling for the two-phase short-form note.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoteConfig {
    /// Headline phase temperature
    pub title_temperature: f32,
    /// Headline phase cap; headlines are terse
    pub title_max_tokens: u32,
    /// Body phase temperature
    pub body_temperature: f32,
    /// Body phase cap
    pub max_tokens: u32,
    /// Characters of content shown to the headline phase
    pub preview_chars: usize,
    /// Headline substituted when none can be parsed
    pub placeholder_title: String,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            title_temperature: 0.8,
            title_max_tokens: 500,
            body_temperature: 0.7,
            max_tokens: 2000,
            preview_chars: 500,
            placeholder_title: "小红书笔记".to_string(),
        }
    }
}

/// Acceptance rules for headline candidates.
///
/// # Examples
///
/// ```
/// use vidnote_config::HeadlineRules;
///
/// let rules = HeadlineRules::default();
/// assert!(!rules.accepts("abcd"));
/// assert!(rules.accepts("twenty chars exactly"));
/// assert!(!rules.accepts(&"x".repeat(50)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadlineRules {
    /// Shortest accepted candidate, in characters
    pub min_chars: usize,
    /// Longest accepted candidate, in characters
    pub max_chars: usize,
    /// Candidates kept per reply
    pub max_candidates: usize,
    /// Lines inspected when no headline section is found
    pub fallback_scan_lines: usize,
}

impl Default for HeadlineRules {
    fn default() -> Self {
        Self {
            min_chars: 6,
            max_chars: 49,
            max_candidates: 5,
            fallback_scan_lines: 10,
        }
    }
}

impl HeadlineRules {
    /// Whether a cleaned line is within `[min_chars, max_chars]`.
    pub fn accepts(&self, line: &str) -> bool {
        let len = line.chars().count();
        len >= self.min_chars && len <= self.max_chars
    }
}

/// Placement of media references in a short-form note.
///
/// # Examples
///
/// ```
/// use vidnote_config::NoteLayout;
///
/// let layout = NoteLayout::default();
/// assert_eq!(layout.split_index(5), 2);
/// assert_eq!(layout.split_index(1), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoteLayout {
    /// Fraction of paragraphs placed before the inline figure
    pub split_ratio: f64,
    /// Media references placed at most (cover, inline, trailing)
    pub max_images: usize,
}

impl Default for NoteLayout {
    fn default() -> Self {
        Self {
            split_ratio: 0.5,
            max_images: 3,
        }
    }
}

impl NoteLayout {
    /// Paragraph index at which the body is divided.
    pub fn split_index(&self, paragraphs: usize) -> usize {
        let index = (paragraphs as f64 * self.split_ratio).floor() as usize;
        index.min(paragraphs)
    }
}

/// Transcript reorganisation settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrganizeConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Output cap per chunk
    pub max_tokens: u32,
    /// Maximum characters per chunk
    pub chunk_chars: usize,
    /// Characters carried over between chunks
    pub overlap_chars: usize,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4000,
            chunk_chars: 2000,
            overlap_chars: 200,
        }
    }
}
