use proptest::prelude::*;

use rxr_nullables::NullAddressLog;
use rxr_store::AddressLogStore;
use rxr_types::VerificationOutcome;
use rxr_verification::{extract_address, AddressVerifier};

proptest! {
    /// Text with no digits can never contain a house number, so nothing is recorded.
    #[test]
    fn digit_free_text_is_unrecognized(text in "[A-Za-z ,.:\n]{0,200}") {
        let log = NullAddressLog::new();
        let verifier = AddressVerifier::new(&log);
        prop_assert_eq!(verifier.verify(&text).unwrap(), VerificationOutcome::Unrecognized);
        prop_assert_eq!(log.record_count().unwrap(), 0);
    }

    /// A clean street address embedded in digit-free prose is found verbatim.
    #[test]
    fn embedded_address_is_found(
        prefix in "[A-Za-z ]{0,40}",
        number in 100u32..99_999,
        street in "[A-Z][a-z]{2,10}",
        suffix in prop::sample::select(vec!["Street", "St", "Road", "Rd", "Avenue", "Ave", "Lane", "Drive"]),
        tail in "[.,;!]{1,3}",
    ) {
        let address = format!("{number} {street} {suffix}");
        let text = format!("{prefix} {address}{tail}");
        prop_assert_eq!(extract_address(&text), Some(address));
    }

    /// Repeated submissions of one document grow the log by exactly one.
    #[test]
    fn repeat_submissions_add_one_record(repeats in 1usize..6, number in 100u32..99_999) {
        let log = NullAddressLog::new();
        let verifier = AddressVerifier::new(&log);
        let text = format!("Proof of address: {number} Main Street.");

        let outcomes: Vec<_> = (0..repeats).map(|_| verifier.verify(&text).unwrap()).collect();
        prop_assert!(outcomes[0].is_new());
        prop_assert!(outcomes[1..]
            .iter()
            .all(|o| matches!(o, VerificationOutcome::Duplicate { .. })),
            "expected all subsequent outcomes to be Duplicate");
        prop_assert_eq!(log.record_count().unwrap(), 1);
    }
}
