//! Prompt construction.
//!
//! Templates live in `prompts/` and are compiled in. Rendering is a single
//! pass over the template, so placeholder-like text inside the content is
//! never expanded.

use derive_getters::Getters;
use regex::Regex;
use std::sync::LazyLock;
use vidnote_config::NoteConfig;
use vidnote_core::VideoContext;

use crate::text::truncate_chars;

const ARTICLE_SYSTEM: &str = include_str!("../prompts/article_system.txt");
const ARTICLE_USER: &str = include_str!("../prompts/article_user.txt");
const NOTE_TITLES_SYSTEM: &str = include_str!("../prompts/note_titles_system.txt");
const NOTE_TITLES_USER: &str = include_str!("../prompts/note_titles_user.txt");
const NOTE_BODY_SYSTEM: &str = include_str!("../prompts/note_body_system.txt");
const NOTE_BODY_USER: &str = include_str!("../prompts/note_body_user.txt");
const NOTE_COMBINED_SYSTEM: &str = include_str!("../prompts/note_combined_system.txt");
const NOTE_COMBINED_USER: &str = include_str!("../prompts/note_combined_user.txt");
const ORGANIZE_SYSTEM: &str = include_str!("../prompts/organize_system.txt");
const ORGANIZE_USER: &str = include_str!("../prompts/organize_user.txt");

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("Valid placeholder regex"));

/// Which artifact (and phase) a prompt is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptProfile<'a> {
    /// Long-form article; context is embedded above the content
    Article {
        /// Source video metadata
        context: &'a VideoContext,
    },
    /// Short-form phase 1: headline candidates from a content preview
    NoteHeadlines,
    /// Short-form phase 2: body conditioned on the chosen headline
    NoteBody {
        /// Primary headline from phase 1
        headline: &'a str,
    },
    /// Short-form single call returning headlines, body and tags together
    NoteCombined,
    /// Transcript reorganisation
    Organize,
}

impl PromptProfile<'_> {
    /// Phase name used in logs.
    pub fn phase(&self) -> &'static str {
        match self {
            PromptProfile::Article { .. } => "article",
            PromptProfile::NoteHeadlines => "note.titles",
            PromptProfile::NoteBody { .. } => "note.body",
            PromptProfile::NoteCombined => "note.combined",
            PromptProfile::Organize => "organize",
        }
    }
}

/// A (system instruction, user instruction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Prompt {
    system: String,
    user: String,
}

/// Builds prompts. Pure string construction.
///
/// # Examples
///
/// ```
/// use vidnote_generation::{PromptBuilder, PromptProfile};
///
/// let builder = PromptBuilder::new(10);
/// let prompt = builder.build("一二三四五六七八九十十一", &PromptProfile::NoteHeadlines);
/// assert!(prompt.user().contains("一二三四五六七八九十..."));
/// assert!(!prompt.user().contains("十一"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    preview_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(500)
    }
}

impl PromptBuilder {
    /// Builder whose headline phase sees at most `preview_chars` characters.
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Builder configured from the `[note]` section.
    pub fn from_config(config: &NoteConfig) -> Self {
        Self::new(config.preview_chars)
    }

    /// Assemble the instruction pair for `content` under `profile`.
    pub fn build(&self, content: &str, profile: &PromptProfile<'_>) -> Prompt {
        match profile {
            PromptProfile::Article { context } => Prompt {
                system: render(ARTICLE_SYSTEM, &[]),
                user: render(
                    ARTICLE_USER,
                    &[
                        ("title", context.title().as_str()),
                        ("uploader", context.uploader().as_str()),
                        ("url", context.url().as_str()),
                        ("platform", context.platform().as_str()),
                        ("content", content),
                    ],
                ),
            },
            PromptProfile::NoteHeadlines => {
                let preview = truncate_chars(content.trim(), self.preview_chars, "...");
                Prompt {
                    system: render(NOTE_TITLES_SYSTEM, &[]),
                    user: render(NOTE_TITLES_USER, &[("preview", preview.as_str())]),
                }
            }
            PromptProfile::NoteBody { headline } => Prompt {
                system: render(NOTE_BODY_SYSTEM, &[]),
                user: render(
                    NOTE_BODY_USER,
                    &[("headline", *headline), ("content", content)],
                ),
            },
            PromptProfile::NoteCombined => Prompt {
                system: render(NOTE_COMBINED_SYSTEM, &[]),
                user: render(NOTE_COMBINED_USER, &[("content", content)]),
            },
            PromptProfile::Organize => Prompt {
                system: render(ORGANIZE_SYSTEM, &[]),
                user: render(ORGANIZE_USER, &[("content", content)]),
            },
        }
    }
}

/// Substitute `{name}` placeholders in one pass; unknown names are left as-is.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template.trim(), |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
