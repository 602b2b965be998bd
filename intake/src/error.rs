use thiserror::Error;

/// Failure to turn an uploaded document into text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read upload {path}: {source}")]
    Upload {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to archive upload: {0}")]
    Archive(#[source] std::io::Error),

    #[error("verification error: {0}")]
    Verification(#[from] rxr_verification::VerificationError),
}
