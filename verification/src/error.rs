use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("address log unavailable: {0}")]
    Storage(#[from] rxr_store::StoreError),

    #[error("invalid address record: {0}")]
    Record(#[from] rxr_types::RxrError),
}
