//! Chat assistant.
//!
//! Conversation state lives in an explicit [`ChatSession`] owned by the
//! caller; nothing is kept in process-wide globals. The model itself is an
//! opaque [`CompletionClient`] that receives the whole history and returns
//! the next assistant turn.

pub mod assistant;
pub mod client;
pub mod error;
pub mod session;

pub use assistant::Assistant;
pub use client::{CompletionClient, OpenAiClient, DEFAULT_MODEL};
pub use error::AssistantError;
pub use session::ChatSession;
