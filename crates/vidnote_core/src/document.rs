//! The final deliverable.

use serde::{Deserialize, Serialize};

/// A finished markdown document.
///
/// Immutable once produced; the caller owns persistence.
///
/// # Examples
///
/// ```
/// use vidnote_core::Document;
///
/// let doc = Document::new("# Title\n\nBody");
/// assert_eq!(doc.lines().count(), 3);
/// assert!(doc.to_string().starts_with("# Title"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct Document(String);

impl Document {
    /// Wrap rendered text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the document's lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }

    /// Take the rendered text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
