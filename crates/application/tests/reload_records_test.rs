mod helpers;

use helpers::{record, MockRecordSource};
use relay_dns_application::services::RecordStore;
use relay_dns_application::use_cases::ReloadRecordsUseCase;
use relay_dns_domain::{DomainError, RecordSet, RecordType};
use std::sync::Arc;

fn initial_set() -> RecordSet {
    RecordSet::new(vec![record("test.local", RecordType::A, "10.0.0.5", 60)])
}

#[tokio::test]
async fn test_reload_installs_new_set() {
    let store = Arc::new(RecordStore::new(initial_set()));
    let source = Arc::new(MockRecordSource::new(RecordSet::new(vec![
        record("test.local", RecordType::A, "10.0.0.9", 60),
        record("other.local", RecordType::A, "10.0.0.10", 60),
    ])));
    let use_case = ReloadRecordsUseCase::new(source.clone(), store.clone());

    let count = use_case.execute().await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        &*store.lookup("test.local", RecordType::A).unwrap().value,
        "10.0.0.9"
    );
    assert_eq!(source.load_count(), 1);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_set() {
    let store = Arc::new(RecordStore::new(initial_set()));
    let source = Arc::new(MockRecordSource::new(RecordSet::empty()));
    source.set_error(DomainError::RecordSourceParse {
        path: "records.toml".to_string(),
        reason: "expected `]`".to_string(),
    });
    let use_case = ReloadRecordsUseCase::new(source, store.clone());

    let result = use_case.execute().await;

    assert!(matches!(result, Err(DomainError::RecordSourceParse { .. })));
    assert_eq!(store.len(), 1);
    assert_eq!(
        &*store.lookup("test.local", RecordType::A).unwrap().value,
        "10.0.0.5"
    );
}

#[tokio::test]
async fn test_reload_is_idempotent() {
    let store = Arc::new(RecordStore::empty());
    let source = Arc::new(MockRecordSource::new(initial_set()));
    let use_case = ReloadRecordsUseCase::new(source, store.clone());

    use_case.execute().await.unwrap();
    let first = store.snapshot();
    use_case.execute().await.unwrap();

    assert_eq!(*store.snapshot(), *first);
}

#[tokio::test]
async fn test_reload_to_empty_set() {
    let store = Arc::new(RecordStore::new(initial_set()));
    let source = Arc::new(MockRecordSource::new(RecordSet::empty()));
    let use_case = ReloadRecordsUseCase::new(source, store.clone());

    assert_eq!(use_case.execute().await.unwrap(), 0);
    assert!(store.is_empty());
}
