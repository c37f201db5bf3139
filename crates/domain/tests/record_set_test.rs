use relay_dns_domain::{RecordSet, RecordType, RecordsDocument};

mod helpers;
use helpers::{definition, RecordEntryBuilder};

#[test]
fn test_first_match_in_order_wins() {
    let set: RecordSet = vec![
        RecordEntryBuilder::new()
            .domain("*.example.com")
            .value("10.0.0.1")
            .build(),
        RecordEntryBuilder::new()
            .domain("www.example.com")
            .value("10.0.0.2")
            .build(),
    ]
    .into_iter()
    .collect();

    let found = set.find("www.example.com", RecordType::A).unwrap();
    assert_eq!(&*found.value, "10.0.0.1");
}

#[test]
fn test_find_filters_by_type() {
    let set = RecordSet::new(vec![
        RecordEntryBuilder::new()
            .domain("example.com")
            .record_type(RecordType::AAAA)
            .value("2001:db8::1")
            .build(),
        RecordEntryBuilder::new()
            .domain("example.com")
            .value("10.0.0.1")
            .build(),
    ]);

    assert_eq!(
        &*set.find("example.com", RecordType::A).unwrap().value,
        "10.0.0.1"
    );
    assert!(set.find("example.com", RecordType::MX).is_none());
}

#[test]
fn test_empty_set_finds_nothing() {
    let set = RecordSet::empty();

    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.find("example.com", RecordType::A).is_none());
}

#[test]
fn test_from_definitions_keeps_valid_entries_in_order() {
    let definitions = vec![
        definition("a.example.com", "A", "10.0.0.1", 60),
        definition("b.example.com", "BOGUS", "10.0.0.2", 60),
        definition("c.example.com", "CNAME", "a.example.com", 60),
        definition("", "A", "10.0.0.3", 60),
    ];

    let (set, rejected) = RecordSet::from_definitions(&definitions);

    assert_eq!(set.len(), 2);
    assert_eq!(&*set.entries()[0].domain_pattern, "a.example.com");
    assert_eq!(&*set.entries()[1].domain_pattern, "c.example.com");

    let positions: Vec<usize> = rejected.entries.iter().map(|(i, _)| *i).collect();
    assert_eq!(positions, vec![1, 3]);
}

#[test]
fn test_document_parses_records_array() {
    let document = RecordsDocument::from_toml(
        r#"
        [[records]]
        domain = "test.local"
        type = "A"
        value = "10.0.0.5"
        ttl = 60

        [[records]]
        domain = "_**.deep.com"
        type = "TXT"
        value = "hello"
        "#,
    )
    .unwrap();

    assert_eq!(document.records.len(), 2);
    assert_eq!(document.records[1].record_type, "TXT");
    assert_eq!(document.records[1].ttl, 0);
}

#[test]
fn test_empty_document_round_trips() {
    let document = RecordsDocument::from_toml("records = []").unwrap();
    assert!(document.records.is_empty());

    let document = RecordsDocument::from_toml("").unwrap();
    assert!(document.records.is_empty());
}
