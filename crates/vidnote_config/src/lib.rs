//! Configuration for vidnote.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. Bundled defaults (`vidnote.toml` shipped with the crate)
//! 2. `~/.config/vidnote/vidnote.toml`
//! 3. `./vidnote.toml`
//! 4. An explicit file passed by the caller
//! 5. `VIDNOTE_<SECTION>__<KEY>` environment variables
//!
//! The headline length bounds and the figure split point are heuristics, so
//! they live here as tunable values rather than inside parsing code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;
mod settings;

pub use loader::VidnoteConfig;
pub use settings::{
    ArticleConfig, HeadlineRules, ModelConfig, NoteConfig, NoteLayout, OrganizeConfig,
};
