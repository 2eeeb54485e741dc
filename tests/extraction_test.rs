//! End-to-end integration tests for the extraction pipeline.
//!
//! Tests the complete pipeline from corpus files to records using fixture
//! exports shaped like the Moscow 2013 dumps.

use std::fs;
use std::path::{Path, PathBuf};

use zakupki_extractor::dispatch::DocumentStats;
use zakupki_extractor::sink::MemorySink;
use zakupki_extractor::source::{process_file, process_tree};

/// Path to a fixture file.
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run one fixture through the pipeline.
fn run_fixture(name: &str) -> (MemorySink, DocumentStats) {
    let mut sink = MemorySink::new();
    let stats = process_file(&fixture(name), &mut sink)
        .unwrap_or_else(|e| panic!("Failed to process {name}: {e}"));
    (sink, stats)
}

#[test]
fn test_notification_lots() {
    let (sink, stats) = run_fixture("notification_Moscow_2013.xml");

    // Two lots from the routable notification; the cancel notice is ignored.
    assert_eq!(stats.lots, 2);
    assert_eq!(stats.failed_elements, 0);
    assert_eq!(sink.lots.len(), 2);

    let first = &sink.lots[0];
    assert_eq!(first.lot.ordinal_number, 1);
    assert_eq!(first.lot.lot_name, "Бумага офисная А4");
    assert_eq!(first.lot.max_price, Some(15.0));

    let second = &sink.lots[1];
    assert_eq!(second.lot.ordinal_number, 2);
    assert_eq!(second.lot.max_price, None);

    // Both lots carry the same notification-level fields.
    assert_eq!(first.notification, second.notification);
    assert_eq!(
        first.notification.notification_number,
        "0173100007713000567"
    );
    assert_eq!(first.notification.registration_number, 1771234567);
    assert_eq!(
        first.notification.create_date.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "2013-08-01T10:30:00"
    );
    assert_eq!(first.notification.final_price, None);
    assert_eq!(first.notification.contract_sign_date, None);
    assert_eq!(first.notification.execution_date, None);
}

#[test]
fn test_customer_extraction() {
    let (sink, stats) = run_fixture("organization_Moscow_2013.xml");

    assert_eq!(stats.customers, 1);
    let customer = &sink.customers[0];
    assert_eq!(customer.registration_number, 1731000077);
    assert_eq!(customer.inn, 7710168360);
    assert_eq!(customer.okato, 45286585000);
    assert_eq!(customer.name, "Министерство финансов Российской Федерации");
}

#[test]
fn test_protocol_participants() {
    let (sink, stats) = run_fixture("protocol_Moscow_2013.xml");

    // Three bidders, one without an INN.
    assert_eq!(stats.participants, 2);
    assert_eq!(stats.skipped_participants, 1);

    let (supplier, contact, participant) = &sink.participants[0];
    assert_eq!(supplier.inn, 7701234567);
    assert_eq!(supplier.name, Some("ООО Ромашка".to_string()));
    assert_eq!(contact.last_name, "Иванов");
    assert_eq!(contact.email, Some("ivanov@example.ru".to_string()));
    assert_eq!(contact.phone, Some("74951234567".to_string()));
    assert_eq!(contact.fax, None);
    assert_eq!(participant.notification_number, "0173100007713000567");
    assert_eq!(participant.lot_number, 1);
    assert_eq!(participant.supplier_inn, 7701234567);

    let (supplier, contact, _) = &sink.participants[1];
    assert_eq!(supplier.inn, 7809876543);
    assert_eq!(supplier.name, Some("ИП".to_string()));
    assert_eq!(contact.middle_name, "");
    assert_eq!(contact.fax, Some("88120001122".to_string()));
}

#[test]
fn test_contract_extraction() {
    let (sink, stats) = run_fixture("contract_Moscow_2013.xml");

    // Three contracts in the file; the one without a notification number
    // is dropped.
    assert_eq!(stats.contracts, 2);
    assert_eq!(stats.dropped_contracts, 1);

    let order_founded = &sink.contracts[0];
    assert_eq!(order_founded.notification_number, "0173100007713000567");
    assert_eq!(order_founded.lot_number, 2);
    assert_eq!(order_founded.price, 250000.50);
    assert_eq!(order_founded.current_contract_stage, Some("E".to_string()));
    assert_eq!(order_founded.execution, "2013-12");

    let other_founded = &sink.contracts[1];
    assert_eq!(other_founded.notification_number, "0173100007713000999");
    assert_eq!(other_founded.lot_number, 1);
    assert_eq!(other_founded.current_contract_stage, None);
    assert_eq!(other_founded.execution, "2014-3");
}

#[test]
fn test_extraction_is_idempotent() {
    let (first, _) = run_fixture("notification_Moscow_2013.xml");
    let (second, _) = run_fixture("notification_Moscow_2013.xml");
    assert_eq!(first.lots, second.lots);
}

#[test]
fn test_full_corpus_tree() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "contract_Moscow_2013.xml",
        "notification_Moscow_2013.xml",
        "organization_Moscow_2013.xml",
        "protocol_Moscow_2013.xml",
    ] {
        fs::copy(fixture(name), dir.path().join(name)).unwrap();
    }

    let mut sink = MemorySink::new();
    let stats = process_tree(dir.path(), &mut sink).unwrap();

    assert_eq!(stats.lots, 2);
    assert_eq!(stats.customers, 1);
    assert_eq!(stats.contracts, 2);
    assert_eq!(stats.participants, 2);
    assert_eq!(stats.failed_elements, 0);

    // Organizations are processed before anything that joins against them.
    assert_eq!(sink.customers.len(), 1);
}

#[test]
fn test_zipped_corpus_matches_plain() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let archive_path = dir.path().join("notification_Moscow_2013.zip");

    let mut writer = zip::ZipWriter::new(fs::File::create(&archive_path).unwrap());
    let options = zip::write::SimpleFileOptions::default();
    writer
        .start_file("notification_Moscow_2013.xml", options)
        .unwrap();
    writer
        .write_all(&fs::read(fixture("notification_Moscow_2013.xml")).unwrap())
        .unwrap();
    writer.finish().unwrap();

    let mut zipped = MemorySink::new();
    process_file(&archive_path, &mut zipped).unwrap();

    let (plain, _) = run_fixture("notification_Moscow_2013.xml");
    assert_eq!(zipped.lots, plain.lots);
}
