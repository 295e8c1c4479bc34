//! Prompting, response parsing and document assembly for vidnote.
//!
//! Everything between "raw model text" and "final document" lives here:
//!
//! - [`PromptBuilder`] turns content and context into instruction pairs
//! - [`ArticleGenerator`] and [`NoteGenerator`] drive the completion calls
//! - the parser pulls headlines and tags out of free-form replies
//! - [`DocumentAssembler`] produces documents that survive re-assembly
//! - [`ContentOrganizer`] restructures raw transcripts
//!
//! Generation never returns an error. Driver failures and empty replies are
//! logged and turned into a degraded but well-typed result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod assemble;
mod completion;
mod note;
mod organize;
mod parser;
mod prompt;
mod text;

pub use article::ArticleGenerator;
pub use assemble::{
    DocumentAssembler, METADATA_SENTINEL, NoteAssembly, strip_article_metadata,
    strip_note_decorations,
};
pub use completion::{Sampling, complete};
pub use note::{DraftStatus, NoteDraft, NoteEvent, NoteGenerator, NoteMachine, NotePhase, NoteState};
pub use organize::ContentOrganizer;
pub use parser::{
    LineMarker, classify_line, parse_combined_body, parse_headline_section, parse_headlines,
    parse_tags, strip_bracket, strip_bullet, strip_markers, strip_numbered,
};
pub use prompt::{Prompt, PromptBuilder, PromptProfile};
pub use text::{split_content, truncate_chars};
