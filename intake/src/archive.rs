//! On-disk archive of raw uploads.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Stores every upload as `proof_{YYYYMMDD-HHMMSS}_{original name}`.
#[derive(Clone, Debug)]
pub struct UploadArchive {
    dir: PathBuf,
}

impl UploadArchive {
    pub const PREFIX: &'static str = "proof";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` to a fresh file and return its path.
    ///
    /// The directory is created on demand. An existing file is never
    /// overwritten: a `-N` counter is added to the timestamp instead.
    pub fn save(
        &self,
        original_name: &str,
        bytes: &[u8],
        at: NaiveDateTime,
    ) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let stamp = at.format("%Y%m%d-%H%M%S").to_string();
        let name = sanitize_file_name(original_name);

        let mut attempt = 0u32;
        loop {
            let file_name = if attempt == 0 {
                format!("{}_{stamp}_{name}", Self::PREFIX)
            } else {
                format!("{}_{stamp}-{attempt}_{name}", Self::PREFIX)
            };
            let path = self.dir.join(file_name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(bytes)?;
                    file.sync_all()?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Keep the upload's own name but never let it escape the archive directory.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "upload".to_string()
    } else {
        cleaned
    }
}
