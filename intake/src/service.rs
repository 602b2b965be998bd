//! Upload-to-decision pipeline.

use std::path::Path;

use rxr_store::AddressLogStore;
use rxr_verification::AddressVerifier;

use crate::{
    Clock, DocumentKind, IntakeDecision, IntakeError, IntakeReport, SystemClock, TextExtractor,
    UploadArchive,
};

pub struct IntakeService<S, E, C = SystemClock> {
    archive: UploadArchive,
    extractor: E,
    verifier: AddressVerifier<S>,
    clock: C,
}

impl<S, E> IntakeService<S, E, SystemClock> {
    pub fn new(archive: UploadArchive, extractor: E, verifier: AddressVerifier<S>) -> Self {
        Self {
            archive,
            extractor,
            verifier,
            clock: SystemClock,
        }
    }
}

impl<S, E, C> IntakeService<S, E, C>
where
    S: AddressLogStore,
    E: TextExtractor,
    C: Clock,
{
    /// Replace the clock used to timestamp archived uploads.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> IntakeService<S, E, C2> {
        IntakeService {
            archive: self.archive,
            extractor: self.extractor,
            verifier: self.verifier,
            clock,
        }
    }

    pub fn verifier(&self) -> &AddressVerifier<S> {
        &self.verifier
    }

    pub fn archive(&self) -> &UploadArchive {
        &self.archive
    }

    /// Archive, read, and verify one uploaded document.
    pub fn submit(&self, original_name: &str, bytes: &[u8]) -> Result<IntakeReport, IntakeError> {
        let saved_path = self
            .archive
            .save(original_name, bytes, self.clock.now())
            .map_err(IntakeError::Archive)?;
        tracing::info!(path = %saved_path.display(), size = bytes.len(), "upload archived");

        let kind = DocumentKind::from_file_name(original_name);
        let text = match self.extractor.extract(&saved_path, kind) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    path = %saved_path.display(),
                    kind = kind.as_str(),
                    error = %e,
                    "text extraction failed, routing to manual review"
                );
                return Ok(IntakeReport {
                    saved_path,
                    decision: IntakeDecision::NeedsManualReview {
                        reason: e.to_string(),
                    },
                });
            }
        };

        let outcome = self.verifier.verify(&text)?;
        Ok(IntakeReport {
            saved_path,
            decision: IntakeDecision::Verified { outcome },
        })
    }

    /// Submit a file already on disk under its own file name.
    pub fn submit_file(&self, path: &Path) -> Result<IntakeReport, IntakeError> {
        let bytes = std::fs::read(path).map_err(|source| IntakeError::Upload {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.submit(&name, &bytes)
    }
}
