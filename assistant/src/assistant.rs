//! Ask-and-record loop over a [`ChatSession`].

use crate::{AssistantError, ChatSession, CompletionClient};

pub struct Assistant<C> {
    client: C,
    model: String,
}

impl<C: CompletionClient> Assistant<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` with the session's full history and record the reply.
    ///
    /// On failure the user turn is removed again, so the session never holds
    /// a question without its answer.
    pub async fn ask(&self, session: &mut ChatSession, prompt: &str) -> Result<String, AssistantError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }

        session.push_user(prompt);
        match self.client.complete(&self.model, session.history()).await {
            Ok(reply) => {
                tracing::debug!(
                    model = %self.model,
                    turns = session.turn_count() + 1,
                    "assistant replied"
                );
                session.push_assistant(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!(model = %self.model, error = %e, "completion failed");
                session.rollback_user();
                Err(e)
            }
        }
    }
}
