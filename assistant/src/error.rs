use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("completion API unreachable: {0}")]
    Unreachable(String),

    #[error("completion request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from completion API: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}
