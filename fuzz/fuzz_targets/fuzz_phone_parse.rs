#![no_main]

use libfuzzer_sys::fuzz_target;

use rxr_messages::PhoneNumber;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(phone) = PhoneNumber::parse(raw) {
        let s = phone.as_str();
        assert!(s.starts_with('+'));
        assert!(s[1..].bytes().all(|b| b.is_ascii_digit()));
        // Parsing is idempotent on its own output.
        assert_eq!(PhoneNumber::parse(s).unwrap(), phone);
    }
});
