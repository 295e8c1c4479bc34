//! Output types from completion responses.

use serde::{Deserialize, Serialize};

/// A piece of a completion response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Generated text.
    Text(String),
    /// The model declined to answer; carries the provider's refusal message.
    Refusal(String),
}
