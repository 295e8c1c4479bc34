//! Caller-supplied metadata about the source video.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Title used when the caller does not know it.
pub const DEFAULT_TITLE: &str = "未知";
/// Author used when the caller does not know it.
pub const DEFAULT_UPLOADER: &str = "未知创作者";
/// Platform used when the caller does not know it.
pub const DEFAULT_PLATFORM: &str = "未知";

/// Read-only facts about the video a transcript came from.
///
/// Every field is optional on input; missing fields fall back to fixed
/// human-readable defaults so generation is never blocked by absent metadata.
///
/// # Examples
///
/// ```
/// use vidnote_core::VideoContext;
///
/// let context = VideoContext::default()
///     .with_title("Rust in production")
///     .with_url("https://example.com/v/1");
///
/// assert_eq!(context.title(), "Rust in production");
/// assert_eq!(context.uploader(), "未知创作者");
/// assert!(context.timestamp().is_empty());
///
/// let parsed: VideoContext = serde_json::from_str(r#"{"platform": "bilibili"}"#).unwrap();
/// assert_eq!(parsed.platform(), "bilibili");
/// assert_eq!(parsed.title(), "未知");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct VideoContext {
    /// Video title
    title: String,
    /// Channel or author name
    uploader: String,
    /// Link to the original video, possibly empty
    url: String,
    /// Hosting platform name
    platform: String,
    /// Generation timestamp, possibly empty
    timestamp: String,
}

impl Default for VideoContext {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            uploader: DEFAULT_UPLOADER.to_string(),
            url: String::new(),
            platform: DEFAULT_PLATFORM.to_string(),
            timestamp: String::new(),
        }
    }
}

impl VideoContext {
    /// Build a context from optional fields, substituting defaults for `None`.
    pub fn from_parts(
        title: Option<String>,
        uploader: Option<String>,
        url: Option<String>,
        platform: Option<String>,
        timestamp: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            title: title.unwrap_or(defaults.title),
            uploader: uploader.unwrap_or(defaults.uploader),
            url: url.unwrap_or(defaults.url),
            platform: platform.unwrap_or(defaults.platform),
            timestamp: timestamp.unwrap_or(defaults.timestamp),
        }
    }
}
