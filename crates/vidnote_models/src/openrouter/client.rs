//! OpenRouter driver using reqwest.

use super::conversion;
use super::dto::{ChatResponse, ModelList};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument, warn};
use vidnote_config::ModelConfig;
use vidnote_core::{GenerateRequest, GenerateResponse};
use vidnote_error::{CompletionError, CompletionErrorKind, VidnoteResult};
use vidnote_interface::{CompletionDriver, Health, HealthStatus};

/// OpenRouter (or any OpenAI-compatible) chat-completions driver.
///
/// Every request carries the `HTTP-Referer` and `X-Title` attribution headers.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    app_name: String,
    http_referer: String,
}

impl OpenRouterClient {
    /// Creates a client, reading the API key from `config.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionErrorKind::MissingApiKey`] if the variable is unset or blank.
    #[instrument(skip_all, fields(model = %config.name, key_env = %config.api_key_env))]
    pub fn from_config(config: &ModelConfig) -> VidnoteResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                CompletionError::new(CompletionErrorKind::MissingApiKey(
                    config.api_key_env.clone(),
                ))
            })?;

        Self::with_api_key(api_key, config)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the endpoint is not http(s).
    #[instrument(skip(api_key, config), fields(model = %config.name))]
    pub fn with_api_key(api_key: impl Into<String>, config: &ModelConfig) -> VidnoteResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CompletionError::new(CompletionErrorKind::MissingApiKey(
                config.api_key_env.clone(),
            ))
            .into());
        }

        let base_url = config.api_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(CompletionError::new(CompletionErrorKind::InvalidConfiguration(
                format!("model.api_url must be an http(s) URL, got '{}'", config.api_url),
            ))
            .into());
        }

        debug!(base_url = %base_url, "Created OpenRouter client");

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.name.clone(),
            base_url,
            app_name: config.app_name.clone(),
            http_referer: config.http_referer.clone(),
        })
    }

    /// Base URL requests are sent to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.client.get(format!("{}/{}", self.base_url, path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.client.post(format!("{}/{}", self.base_url, path)))
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.http_referer)
            .header("X-Title", &self.app_name)
    }
}

fn status_error(status: StatusCode, body: String) -> CompletionError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        CompletionError::new(CompletionErrorKind::RateLimit)
    } else {
        CompletionError::new(CompletionErrorKind::Api {
            status: status.as_u16(),
            message: body,
        })
    }
}

#[async_trait]
impl CompletionDriver for OpenRouterClient {
    #[instrument(skip(self, req), fields(provider = "openrouter", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> VidnoteResult<GenerateResponse> {
        let chat_request = conversion::to_chat_request(req, &self.model)?;

        debug!(
            messages = chat_request.messages().len(),
            temperature = ?chat_request.temperature(),
            max_tokens = ?chat_request.max_tokens(),
            "Sending chat completion request"
        );

        let response = self
            .post("chat/completions")
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                CompletionError::new(CompletionErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error_len = error_text.len(), "API error");
            return Err(status_error(status, error_text).into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode chat completion");
            CompletionError::new(CompletionErrorKind::ResponseParsing(e.to_string()))
        })?;

        if let Some(usage) = chat_response.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens(),
                completion_tokens = usage.completion_tokens(),
                "Token usage"
            );
        }

        conversion::from_chat_response(&chat_response)
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Health for OpenRouterClient {
    /// Lists models. Failures are reported as a status and logged as a warning.
    #[instrument(skip(self), fields(provider = "openrouter"))]
    async fn health(&self) -> VidnoteResult<HealthStatus> {
        let response = match self.get("models").send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "OpenRouter connection test failed; continuing anyway");
                return Ok(HealthStatus::Unhealthy {
                    message: e.to_string(),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = status_error(status, response.text().await.unwrap_or_default())
                .kind
                .to_string();
            warn!(status = %status, "OpenRouter connection test failed; continuing anyway");
            return Ok(HealthStatus::Unhealthy { message });
        }

        match response.json::<ModelList>().await {
            Ok(models) => {
                debug!(models = models.data().len(), "OpenRouter connection ok");
                Ok(HealthStatus::Healthy)
            }
            Err(e) => {
                warn!(error = %e, "Unexpected model listing");
                Ok(HealthStatus::Degraded {
                    message: format!("Unexpected model listing: {}", e),
                })
            }
        }
    }
}
