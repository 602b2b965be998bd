//! Nullable text extractor: scripted OCR/PDF output.

use rxr_intake::{DocumentKind, ExtractionError, TextExtractor};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Returns the same text (or the same failure) for every document.
pub struct NullExtractor {
    result: Result<String, String>,
    calls: Mutex<Vec<(PathBuf, DocumentKind)>>,
}

impl NullExtractor {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            result: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(path, kind)` the extractor was asked to read.
    pub fn calls(&self) -> Vec<(PathBuf, DocumentKind)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextExtractor for NullExtractor {
    fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
        self.calls.lock().unwrap().push((path.to_path_buf(), kind));
        self.result.clone().map_err(ExtractionError::Other)
    }
}
