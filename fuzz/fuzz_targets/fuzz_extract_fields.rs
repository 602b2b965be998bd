#![no_main]

use libfuzzer_sys::fuzz_target;

// Extraction must never panic, and whatever it finds must be a slice of the input.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let fields = rxr_verification::extract_fields(text);
    if let Some(name) = &fields.name {
        assert!(text.contains(name.as_str()));
        assert_eq!(name.split(' ').count(), 2);
    }
    if let Some(address) = &fields.address {
        assert!(text.contains(address.as_str()));
        assert!(address.chars().next().is_some_and(|c| c.is_numeric()));
    }
});
