//! Normalised result of one completion call.

/// Either usable text or an explicit "no usable output".
///
/// Empty replies and driver errors both collapse into [`CompletionOutcome::NoOutput`];
/// callers treat it as a recoverable condition.
///
/// # Examples
///
/// ```
/// use vidnote_core::CompletionOutcome;
///
/// let ok = CompletionOutcome::from_text("  Article body.  ");
/// assert_eq!(ok.text(), Some("Article body."));
///
/// let empty = CompletionOutcome::from_text("   ");
/// assert!(!empty.is_text());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompletionOutcome {
    /// Non-empty, trimmed text
    Text(String),
    /// Nothing usable came back
    NoOutput {
        /// Why: the driver error, or a note that the reply was empty
        reason: String,
    },
}

impl CompletionOutcome {
    /// Trim `text`; blank text becomes [`CompletionOutcome::NoOutput`].
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            Self::no_output("completion returned empty text")
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Explicit failure with a reason.
    pub fn no_output(reason: impl Into<String>) -> Self {
        Self::NoOutput {
            reason: reason.into(),
        }
    }

    /// Whether usable text is present.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Borrow the text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::NoOutput { .. } => None,
        }
    }

    /// Take the text, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::NoOutput { .. } => None,
        }
    }
}
