//! Text extraction collaborator.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::{DocumentKind, ExtractionError};

/// Turns an archived upload into raw text.
pub trait TextExtractor {
    fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractionError>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
        (**self).extract(path, kind)
    }
}

/// Shells out to `pdftotext` for PDFs and `tesseract` for images.
#[derive(Clone, Debug)]
pub struct CommandTextExtractor {
    pdf_program: String,
    ocr_program: String,
}

impl CommandTextExtractor {
    pub const DEFAULT_PDF_PROGRAM: &'static str = "pdftotext";
    pub const DEFAULT_OCR_PROGRAM: &'static str = "tesseract";

    pub fn new(pdf_program: impl Into<String>, ocr_program: impl Into<String>) -> Self {
        Self {
            pdf_program: pdf_program.into(),
            ocr_program: ocr_program.into(),
        }
    }

    fn run(&self, program: &str, path: &Path, trailing_arg: &str) -> Result<String, ExtractionError> {
        tracing::debug!(program, path = %path.display(), "running text extractor");
        let output = Command::new(program)
            .arg(path)
            .arg(trailing_arg)
            .output()
            .map_err(|source| ExtractionError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExtractionError::Failed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for CommandTextExtractor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PDF_PROGRAM, Self::DEFAULT_OCR_PROGRAM)
    }
}

impl TextExtractor for CommandTextExtractor {
    fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
        match kind {
            // `pdftotext <file> -` writes the text layer to stdout.
            DocumentKind::Pdf => self.run(&self.pdf_program, path, "-"),
            // `tesseract <image> stdout` writes recognised text to stdout.
            DocumentKind::Image => self.run(&self.ocr_program, path, "stdout"),
            DocumentKind::PlainText => {
                fs::read_to_string(path).map_err(|source| ExtractionError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
}
