//! Test utilities for vidnote generation tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

#[allow(unused_imports)]
pub use vidnote_core::VideoContext;

/// Context used by the end-to-end scenarios.
#[allow(dead_code)]
pub fn scenario_context() -> VideoContext {
    VideoContext::from_parts(
        Some("T".to_string()),
        Some("U".to_string()),
        Some("http://x".to_string()),
        Some("P".to_string()),
        Some("2024-01-01".to_string()),
    )
}
