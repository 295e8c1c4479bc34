//! Trait definitions for completion services used by vidnote.
//!
//! The generation layer only ever talks to a [`CompletionDriver`]: a prompt
//! goes in, text (or an error) comes out.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{CompletionDriver, Health};
pub use types::HealthStatus;
