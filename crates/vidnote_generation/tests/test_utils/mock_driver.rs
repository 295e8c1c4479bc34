//! Scripted completion driver.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vidnote_core::{GenerateRequest, GenerateResponse};
use vidnote_error::{CompletionError, CompletionErrorKind, VidnoteError, VidnoteResult};
use vidnote_interface::CompletionDriver;

/// One scripted reply.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// Reply with this text
    Success(String),
    /// Reply with an empty body
    Empty,
    /// Fail with this error
    Error(CompletionErrorKind),
}

/// Driver that replays a sequence of responses and records every request.
///
/// Calls past the end of the sequence fail.
#[derive(Clone)]
pub struct MockDriver {
    responses: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Driver replaying `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Driver whose first call succeeds with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// Driver that always fails.
    pub fn new_failing() -> Self {
        Self::new_sequence(Vec::new())
    }

    /// Number of generate() calls so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self, req: &GenerateRequest) -> VidnoteResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());

        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;

        match self.responses.get(current) {
            Some(MockResponse::Success(text)) => Ok(GenerateResponse::from_text(text.clone())),
            Some(MockResponse::Empty) => Ok(GenerateResponse::new(Vec::new())),
            Some(MockResponse::Error(kind)) => {
                Err(VidnoteError::from(CompletionError::new(kind.clone())))
            }
            None => Err(VidnoteError::from(CompletionError::new(
                CompletionErrorKind::Http(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    self.responses.len()
                )),
            ))),
        }
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> VidnoteResult<GenerateResponse> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response(req)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
