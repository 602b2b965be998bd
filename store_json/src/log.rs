//! File-backed [`AddressLogStore`].

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rxr_store::{AddressLogStore, StoreError};
use rxr_types::AddressRecord;
use tempfile::NamedTempFile;

use crate::JsonLogError;

/// Address log persisted as a JSON array of `{"name", "address"}` objects.
///
/// A missing file reads as an empty log; the file and its parent directory
/// are created on the first append. Share one instance (e.g. behind an
/// `Arc`) per log file: the read-modify-write lock is per instance.
pub struct JsonAddressLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonAddressLog {
    /// Open the log at `path`. Nothing is read or created until first use.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a panic in another holder cannot leave it inconsistent.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_records(&self) -> Result<Vec<AddressRecord>, JsonLogError> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&contents).map_err(|source| JsonLogError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write_records(&self, records: &[AddressRecord]) -> Result<(), JsonLogError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, records)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        // The temp file is created 0600; keep whatever mode the log already had.
        match fs::metadata(&self.path) {
            Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tmp.persist(&self.path).map_err(|e| JsonLogError::Io(e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "address log rewritten"
        );
        Ok(())
    }
}

impl AddressLogStore for JsonAddressLog {
    fn load_all(&self) -> Result<Vec<AddressRecord>, StoreError> {
        let _guard = self.guard();
        Ok(self.read_records()?)
    }

    fn insert_if_absent(&self, record: &AddressRecord) -> Result<bool, StoreError> {
        let _guard = self.guard();
        let mut records = self.read_records()?;
        if records.iter().any(|r| r.has_address(record.address())) {
            return Ok(false);
        }
        records.push(record.clone());
        self.write_records(&records)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, address: &str) -> AddressRecord {
        AddressRecord::new(Some(name.to_string()), address).unwrap()
    }

    #[test]
    fn missing_file_is_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonAddressLog::open(dir.path().join("address_log.json"));
        assert!(log.load_all().unwrap().is_empty());
        assert_eq!(log.record_count().unwrap(), 0);
        assert!(!log.path().exists());
    }

    #[test]
    fn insert_creates_file_and_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("address_log.json");
        let log = JsonAddressLog::open(&path);

        assert!(log.insert_if_absent(&record("John Smith", "4521 Oak Avenue")).unwrap());
        assert!(path.exists());
        assert_eq!(log.load_all().unwrap(), vec![record("John Smith", "4521 Oak Avenue")]);
    }

    #[test]
    fn duplicate_address_is_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonAddressLog::open(dir.path().join("address_log.json"));

        assert!(log.insert_if_absent(&record("John Smith", "123 Main Street")).unwrap());
        assert!(!log.insert_if_absent(&record("Jane Smith", "123 Main Street")).unwrap());

        let all = log.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), "John Smith");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonAddressLog::open(dir.path().join("address_log.json"));

        for address in ["300 Pine Rd", "100 Elm St", "200 Bay Blvd"] {
            log.insert_if_absent(&record("A B", address)).unwrap();
        }
        let addresses: Vec<_> = log
            .load_all()
            .unwrap()
            .iter()
            .map(|r| r.address().to_string())
            .collect();
        assert_eq!(addresses, ["300 Pine Rd", "100 Elm St", "200 Bay Blvd"]);
    }

    #[test]
    fn file_format_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address_log.json");
        let log = JsonAddressLog::open(&path);
        log.insert_if_absent(&record("John Smith", "123 Main Street")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw,
            "[\n  {\n    \"name\": \"John Smith\",\n    \"address\": \"123 Main Street\"\n  }\n]\n"
        );
    }

    #[test]
    fn reads_log_written_by_another_tool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address_log.json");
        fs::write(
            &path,
            r#"[{"name": "Unknown", "address": "88 Bay Rd"}, {"address": "9 Hill Dr"}]"#,
        )
        .unwrap();

        let log = JsonAddressLog::open(&path);
        assert!(log.contains_address("88 Bay Rd").unwrap());
        assert!(!log.contains_address("88 bay rd").unwrap());
        assert_eq!(log.record_count().unwrap(), 2);
    }

    #[test]
    fn corrupt_log_is_reported_and_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address_log.json");
        fs::write(&path, "{not json").unwrap();

        let log = JsonAddressLog::open(&path);
        let err = log
            .insert_if_absent(&record("John Smith", "123 Main Street"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Corruption(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn non_utf8_log_is_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address_log.json");
        fs::write(&path, [0xff, 0xfe, b'[']).unwrap();

        let err = JsonAddressLog::open(&path).load_all().unwrap_err();
        assert!(matches!(err, StoreError::Corruption(_)));
    }

    #[test]
    fn whitespace_only_log_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address_log.json");
        fs::write(&path, " \n\t\n").unwrap();

        assert!(JsonAddressLog::open(&path).load_all().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_log_directory_is_an_io_error() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        // `logs` is a dangling symlink: reading under it finds nothing, but it
        // cannot be created as a directory.
        symlink(dir.path().join("gone"), dir.path().join("logs")).unwrap();
        let log = JsonAddressLog::open(dir.path().join("logs").join("address_log.json"));

        assert!(log.load_all().unwrap().is_empty());
        let err = log
            .insert_if_absent(&record("John Smith", "123 Main Street"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!dir.path().join("gone").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failed_rewrite_keeps_previous_log_bytes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let path = logs.join("address_log.json");
        let log = JsonAddressLog::open(&path);
        log.insert_if_absent(&record("John Smith", "123 Main Street"))
            .unwrap();
        let before = fs::read(&path).unwrap();

        fs::set_permissions(&logs, fs::Permissions::from_mode(0o555)).unwrap();
        // Privileged users bypass directory permissions; nothing to check then.
        let enforced = NamedTempFile::new_in(&logs).is_err();
        if enforced {
            let err = log
                .insert_if_absent(&record("Jane Doe", "456 Oak Avenue"))
                .unwrap_err();
            assert!(matches!(err, StoreError::Io(_)));
            assert_eq!(fs::read(&path).unwrap(), before);
            assert_eq!(fs::read_dir(&logs).unwrap().count(), 1);
        }
        fs::set_permissions(&logs, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address_log.json");
        fs::write(&path, "[]\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let log = JsonAddressLog::open(&path);
        log.insert_if_absent(&record("John Smith", "123 Main Street"))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(log.record_count().unwrap(), 1);
    }
}
