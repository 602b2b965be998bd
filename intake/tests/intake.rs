//! Upload → extraction → verification pipeline with nullable collaborators.

use rxr_intake::{DocumentKind, IntakeDecision, IntakeError, IntakeService, UploadArchive};
use rxr_nullables::{NullAddressLog, NullClock, NullExtractor};
use rxr_store::AddressLogStore;
use rxr_store_json::JsonAddressLog;
use rxr_types::VerificationOutcome;
use rxr_verification::AddressVerifier;

fn service<'a>(
    dir: &std::path::Path,
    log: &'a NullAddressLog,
    extractor: &'a NullExtractor,
    clock: &'a NullClock,
) -> IntakeService<&'a NullAddressLog, &'a NullExtractor, &'a NullClock> {
    IntakeService::new(
        UploadArchive::new(dir.join("uploaded_verifications")),
        extractor,
        AddressVerifier::new(log),
    )
    .with_clock(clock)
}

#[test]
fn readable_document_is_verified_and_archived() {
    let dir = tempfile::tempdir().unwrap();
    let log = NullAddressLog::new();
    let extractor = NullExtractor::returning("Registered owner\nName: John Smith\n4521 Oak Avenue");
    let clock = NullClock::at(2024, 3, 9, 14, 5, 0);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let report = intake.submit("Registration.PDF", b"%PDF-1.4").unwrap();

    assert_eq!(
        report.decision,
        IntakeDecision::Verified {
            outcome: VerificationOutcome::New {
                address: "4521 Oak Avenue".into(),
                name: "John Smith".into(),
            }
        }
    );
    assert_eq!(
        report.saved_path.file_name().unwrap().to_str().unwrap(),
        "proof_20240309-140500_Registration.PDF"
    );
    assert_eq!(std::fs::read(&report.saved_path).unwrap(), b"%PDF-1.4");
    assert_eq!(extractor.calls(), vec![(report.saved_path.clone(), DocumentKind::Pdf)]);
    assert_eq!(log.record_count().unwrap(), 1);
}

#[test]
fn second_upload_for_same_household_is_approved() {
    let dir = tempfile::tempdir().unwrap();
    let log = NullAddressLog::new();
    let extractor = NullExtractor::returning("123 Main Street");
    let clock = NullClock::at(2024, 3, 9, 14, 5, 0);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let first = intake.submit("card.jpg", b"jpg").unwrap();
    clock.advance(60);
    let second = intake.submit("card.jpg", b"jpg").unwrap();

    assert!(first.decision.outcome().unwrap().is_new());
    assert!(matches!(
        second.decision.outcome(),
        Some(VerificationOutcome::Duplicate { .. })
    ));
    assert!(second.decision.user_message().contains("Access approved"));
    assert_ne!(first.saved_path, second.saved_path);
    assert_eq!(log.record_count().unwrap(), 1);
}

#[test]
fn unreadable_document_goes_to_manual_review() {
    let dir = tempfile::tempdir().unwrap();
    let log = NullAddressLog::new();
    let extractor = NullExtractor::failing("tesseract crashed");
    let clock = NullClock::at(2024, 3, 9, 14, 5, 0);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let report = intake.submit("blurry.png", b"png").unwrap();

    assert_eq!(
        report.decision,
        IntakeDecision::NeedsManualReview {
            reason: "tesseract crashed".into()
        }
    );
    assert!(report.saved_path.exists());
    assert_eq!(log.write_count(), 0);
}

#[test]
fn text_without_address_is_reported_unrecognized() {
    let dir = tempfile::tempdir().unwrap();
    let log = NullAddressLog::new();
    let extractor = NullExtractor::returning("CarFax report for John Smith");
    let clock = NullClock::at(2024, 3, 9, 14, 5, 0);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let report = intake.submit("carfax.pdf", b"pdf").unwrap();
    assert_eq!(
        report.decision.outcome(),
        Some(&VerificationOutcome::Unrecognized)
    );
    assert_eq!(log.write_count(), 0);
}

#[test]
fn storage_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let log = NullAddressLog::failing("read-only filesystem");
    let extractor = NullExtractor::returning("123 Main Street");
    let clock = NullClock::at(2024, 3, 9, 14, 5, 0);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let err = intake.submit("bill.pdf", b"pdf").unwrap_err();
    assert!(matches!(err, IntakeError::Verification(_)));
}

#[test]
fn submit_file_uses_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("utility bill.txt");
    std::fs::write(&source, "anything").unwrap();

    let log = NullAddressLog::new();
    let extractor = NullExtractor::returning("77 x 900 Sunset Blvd");
    let clock = NullClock::at(2024, 1, 2, 3, 4, 5);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let report = intake.submit_file(&source).unwrap();
    assert_eq!(
        report.saved_path.file_name().unwrap().to_str().unwrap(),
        "proof_20240102-030405_utility bill.txt"
    );
    assert_eq!(extractor.calls()[0].1, DocumentKind::PlainText);

    let missing = intake.submit_file(&dir.path().join("nope.pdf")).unwrap_err();
    assert!(matches!(missing, IntakeError::Upload { .. }));
}

#[test]
fn report_serializes_for_the_cli() {
    let dir = tempfile::tempdir().unwrap();
    let log = NullAddressLog::new();
    let extractor = NullExtractor::returning("123 Main Street");
    let clock = NullClock::at(2024, 3, 9, 14, 5, 0);
    let intake = service(dir.path(), &log, &extractor, &clock);

    let report = intake.submit("bill.pdf", b"pdf").unwrap();
    let json = serde_json::to_value(&report.decision).unwrap();
    assert_eq!(json["decision"], "verified");
    assert_eq!(json["outcome"]["status"], "new");
    assert_eq!(json["outcome"]["address"], "123 Main Street");
}

#[test]
fn json_log_survives_across_services() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("address_log.json");
    let extractor = NullExtractor::returning("Name: Maria Lopez\n880 Harbor Lane");
    let clock = NullClock::at(2024, 5, 1, 9, 0, 0);

    let first = IntakeService::new(
        UploadArchive::new(dir.path().join("uploads")),
        &extractor,
        AddressVerifier::new(JsonAddressLog::open(&log_path)),
    )
    .with_clock(&clock);
    assert!(first
        .submit("lease.pdf", b"pdf")
        .unwrap()
        .decision
        .outcome()
        .unwrap()
        .is_new());
    drop(first);

    let second = IntakeService::new(
        UploadArchive::new(dir.path().join("uploads")),
        &extractor,
        AddressVerifier::new(JsonAddressLog::open(&log_path)),
    )
    .with_clock(&clock);
    let report = second.submit("lease.pdf", b"pdf").unwrap();
    assert_eq!(
        report.decision.outcome(),
        Some(&VerificationOutcome::Duplicate {
            address: "880 Harbor Lane".into()
        })
    );

    let records = JsonAddressLog::open(&log_path).load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), "Maria Lopez");
    assert_eq!(std::fs::read_dir(dir.path().join("uploads")).unwrap().count(), 2);
}
