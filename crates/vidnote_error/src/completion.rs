//! Completion service errors.
//!
//! These are raised by drivers. The generation layer never lets them escape:
//! it folds every one of them into a "no usable output" outcome.

/// Completion-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// API key environment variable is not set
    #[display("API key environment variable {} not set", _0)]
    MissingApiKey(String),
    /// Driver configuration is unusable
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
    /// Request could not be delivered
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },
    /// Provider throttled the request (HTTP 429)
    #[display("Rate limit exceeded")]
    RateLimit,
    /// Provider answered without any text
    #[display("Completion returned no content")]
    EmptyResponse,
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
}

impl CompletionErrorKind {
    /// Whether the provider is likely to succeed on a later attempt.
    ///
    /// Nothing in vidnote retries automatically; callers use this for reporting.
    pub fn is_transient(&self) -> bool {
        match self {
            CompletionErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 500 | 502 | 503 | 504)
            }
            CompletionErrorKind::RateLimit | CompletionErrorKind::Http(_) => true,
            _ => false,
        }
    }
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use vidnote_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::RateLimit);
/// assert!(err.kind.is_transient());
/// assert!(format!("{}", err).contains("Rate limit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The specific error condition
    pub kind: CompletionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
