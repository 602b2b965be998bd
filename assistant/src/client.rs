//! HTTP client for the hosted chat completion API.

use async_trait::async_trait;
use rxr_types::ChatMessage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::AssistantError;

/// Default timeout for completion requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Produces the next assistant turn for a conversation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, AssistantError>;
}

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        (**self).complete(model, messages).await
    }
}

/// Client for `POST {api_base}/chat/completions`.
pub struct OpenAiClient {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

/// Pull the first choice's text out of a completion response body.
fn first_choice_content(body: serde_json::Value) -> Result<String, AssistantError> {
    let response: CompletionResponse = serde_json::from_value(body).map_err(|e| {
        AssistantError::InvalidResponse(format!("failed to parse completion response: {e}"))
    })?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| AssistantError::InvalidResponse("response has no message content".into()))
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest { model, messages })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    AssistantError::Unreachable(format!("connection failed: {e}"))
                } else {
                    AssistantError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(AssistantError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AssistantError::InvalidResponse(format!("response is not JSON: {e}"))
        })?;
        first_choice_content(body)
    }
}
