#![no_main]

use libfuzzer_sys::fuzz_target;

use rxr_store::{AddressLogStore, StoreError};
use rxr_store_json::JsonAddressLog;
use rxr_types::AddressRecord;

// Arbitrary log file contents either load or fail as corruption, and a
// corrupt file is never rewritten.
fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let path = dir.path().join("address_log.json");
    if std::fs::write(&path, data).is_err() {
        return;
    }

    let log = JsonAddressLog::open(&path);
    match log.load_all() {
        Ok(records) => {
            if let Ok(parsed) = serde_json::from_slice::<Vec<AddressRecord>>(data) {
                assert_eq!(parsed, records);
            }
        }
        Err(StoreError::Corruption(_)) => {
            let record = AddressRecord::new(None, "100 Fuzz Street").unwrap();
            assert!(log.insert_if_absent(&record).is_err());
            assert_eq!(std::fs::read(&path).unwrap(), data);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
