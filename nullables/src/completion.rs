//! Nullable completion client: scripted assistant replies.

use async_trait::async_trait;
use rxr_assistant::{AssistantError, CompletionClient};
use rxr_types::ChatMessage;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Returns pre-configured replies in order and records every request.
pub struct NullCompletionClient {
    replies: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
    failure: Option<String>,
}

impl NullCompletionClient {
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// A client whose every request fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::with_replies(Vec::<String>::new())
        }
    }

    /// Every `(model, messages)` request received, in order.
    pub fn calls(&self) -> Vec<(String, Vec<ChatMessage>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for NullCompletionClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));
        if let Some(reason) = &self.failure {
            return Err(AssistantError::RequestFailed(reason.clone()));
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AssistantError::Other("no scripted reply left".into()))
    }
}
