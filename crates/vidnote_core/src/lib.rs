//! Core data types for vidnote.
//!
//! These types are shared by every other crate in the workspace: the video
//! context supplied by the caller, the request/response shapes exchanged with
//! a completion service, extraction results and the final document.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod document;
mod extraction;
mod message;
mod outcome;
mod output;
mod request;
mod role;

pub use context::{
    DEFAULT_PLATFORM, DEFAULT_TITLE, DEFAULT_UPLOADER, VideoContext,
};
pub use document::Document;
pub use extraction::{Extraction, Headlines};
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use outcome::CompletionOutcome;
pub use output::Output;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
