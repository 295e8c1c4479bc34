//! Document assembly.
//!
//! Assembly strips whatever a previous run inserted before inserting it
//! again, so `assemble(assemble(x)) == assemble(x)`.

mod article;
mod note;

pub use article::{METADATA_SENTINEL, strip_article_metadata};
pub use note::{NoteAssembly, strip_note_decorations};

use vidnote_config::NoteLayout;
use vidnote_core::{Document, VideoContext};

/// Merges generated text with context, media and tags into a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentAssembler {
    layout: NoteLayout,
}

impl DocumentAssembler {
    /// Assembler using the given media layout for notes.
    pub fn new(layout: NoteLayout) -> Self {
        Self { layout }
    }

    /// Article body plus exactly one metadata footer.
    pub fn assemble_article(&self, body: &str, context: &VideoContext) -> Document {
        article::assemble(body, context)
    }

    /// Short-form note with headings, media and a single tag block.
    pub fn assemble_note(&self, body: &str, note: &NoteAssembly<'_>) -> Document {
        note::assemble(body, note, &self.layout)
    }
}
