//! Per-conversation state.

use rxr_types::{ChatMessage, ChatRole};

/// Conversation history for one chat, starting with the system prompt.
#[derive(Clone, Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system_prompt)],
        }
    }

    /// Full history as sent to the model, system prompt first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// User and assistant turns only.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages[1..]
    }

    pub fn turn_count(&self) -> usize {
        self.messages.len() - 1
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Drop the trailing user turn, if the last message is one.
    pub(crate) fn rollback_user(&mut self) {
        if self.messages.len() > 1
            && self.messages.last().map(|m| m.role) == Some(ChatRole::User)
        {
            self.messages.pop();
        }
    }
}
