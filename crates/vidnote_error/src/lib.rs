//! Error types for vidnote.
//!
//! Every error follows the same shape:
//! - a `*ErrorKind` enum (where there is more than one condition)
//! - a `*Error` struct carrying the kind plus the caller location
//! - `#[track_caller]` constructors so the location is captured automatically
//!
//! `VidnoteError` aggregates them and is what public APIs return through
//! [`VidnoteResult`].
//!
//! # Examples
//!
//! ```
//! use vidnote_error::{ConfigError, VidnoteResult};
//!
//! fn load() -> VidnoteResult<u32> {
//!     Err(ConfigError::new("max_tokens must be positive"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod completion;
mod config;
mod error;

pub use builder::{BuilderError, BuilderErrorKind};
pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{VidnoteError, VidnoteErrorKind, VidnoteResult};
