//! Top-level error wrapper types.

use crate::{BuilderError, CompletionError, ConfigError};

/// Every failure vidnote can report.
///
/// # Examples
///
/// ```
/// use vidnote_error::{CompletionError, CompletionErrorKind, VidnoteError};
///
/// let err: VidnoteError = CompletionError::new(CompletionErrorKind::RateLimit).into();
/// assert!(format!("{}", err).contains("Rate limit"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VidnoteErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Completion service error
    #[from(CompletionError)]
    Completion(CompletionError),
}

/// vidnote error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("vidnote Error: {}", _0)]
pub struct VidnoteError(Box<VidnoteErrorKind>);

impl VidnoteError {
    /// Create a new error from a kind.
    pub fn new(kind: VidnoteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VidnoteErrorKind {
        &self.0
    }
}

impl<T> From<T> for VidnoteError
where
    T: Into<VidnoteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for vidnote operations.
pub type VidnoteResult<T> = std::result::Result<T, VidnoteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuilderErrorKind, CompletionErrorKind};

    #[test]
    fn every_kind_converts_into_vidnote_error() {
        let err: VidnoteError = ConfigError::new("note.max_tokens must be positive").into();
        assert!(matches!(err.kind(), VidnoteErrorKind::Config(_)));

        let err: VidnoteError = BuilderError::from("messages must not be empty").into();
        assert!(matches!(
            err.kind(),
            VidnoteErrorKind::Builder(b) if matches!(b.kind(), BuilderErrorKind::ValidationFailed(_))
        ));

        let err: VidnoteError = CompletionError::new(CompletionErrorKind::EmptyResponse).into();
        assert!(matches!(
            err.kind(),
            VidnoteErrorKind::Completion(c) if c.kind == CompletionErrorKind::EmptyResponse
        ));
    }

    #[test]
    fn transport_failures_are_completion_errors() {
        let err: VidnoteError =
            CompletionError::new(CompletionErrorKind::Http("connection reset".to_string())).into();
        assert!(format!("{}", err).contains("Request failed: connection reset"));
    }
}
