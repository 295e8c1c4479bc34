//! Errors raised while loading `vidnote.toml` layers.

/// A configuration layer that could not be read, parsed or validated.
///
/// The message names the offending key, e.g. `headlines.min_chars`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong, naming the key when there is one
    pub message: String,
    /// Line of the check that failed
    pub line: u32,
    /// Source file of the check that failed
    pub file: &'static str,
}

impl ConfigError {
    /// Configuration error located at the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidnote_error::ConfigError;
    ///
    /// let err = ConfigError::new("headlines.min_chars exceeds headlines.max_chars");
    /// assert!(err.message.contains("min_chars"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
