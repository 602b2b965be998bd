//! Uploaded document kinds.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How text is pulled out of an upload, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Text layer of a PDF.
    Pdf,
    /// Already text; read as-is.
    PlainText,
    /// Photo or scan; needs OCR.
    Image,
}

impl DocumentKind {
    pub fn from_file_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("txt") => Self::PlainText,
            _ => Self::Image,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "plain_text",
            Self::Image => "image",
        }
    }
}
