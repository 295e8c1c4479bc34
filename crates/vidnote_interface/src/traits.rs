//! Trait definitions for completion backends and their capabilities.

use crate::HealthStatus;
use async_trait::async_trait;
use std::sync::Arc;
use vidnote_core::{GenerateRequest, GenerateResponse};
use vidnote_error::VidnoteResult;

/// Core trait every completion backend implements.
///
/// Treated as non-deterministic, possibly slow and possibly failing. No
/// retries or timeouts are layered on top of it.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate text for a request.
    async fn generate(&self, req: &GenerateRequest) -> VidnoteResult<GenerateResponse>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "google/gemini-pro").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> CompletionDriver for Arc<T>
where
    T: CompletionDriver + ?Sized,
{
    async fn generate(&self, req: &GenerateRequest) -> VidnoteResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Backends that can report whether they are reachable.
#[async_trait]
pub trait Health: CompletionDriver {
    /// Probe the backend.
    async fn health(&self) -> VidnoteResult<HealthStatus>;
}
