use relay_dns_application::ports::SourceWatcher;
use relay_dns_infrastructure::records::{FileWatcher, DEFAULT_DEBOUNCE};
use std::time::Duration;

#[tokio::test]
async fn test_change_to_watched_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.toml");
    std::fs::write(&path, "records = []\n").unwrap();

    let mut watcher = FileWatcher::watch(&path, DEFAULT_DEBOUNCE).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let contents = "[[records]]\ndomain = \"a.local\"\ntype = \"A\"\nvalue = \"10.0.0.1\"\n";
    std::fs::write(&path, contents).unwrap();

    let changed = tokio::time::timeout(Duration::from_secs(5), watcher.changed())
        .await
        .expect("no change reported");
    assert!(changed);
}

#[tokio::test]
async fn test_sibling_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.toml");
    std::fs::write(&path, "records = []\n").unwrap();

    let mut watcher = FileWatcher::watch(&path, DEFAULT_DEBOUNCE).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    std::fs::write(dir.path().join("other.toml"), "x = 1\n").unwrap();

    let result = tokio::time::timeout(Duration::from_millis(800), watcher.changed()).await;
    assert!(result.is_err());
}

#[test]
fn test_watching_missing_directory_fails() {
    let result = FileWatcher::watch("/nonexistent/relay-dns/records.toml", DEFAULT_DEBOUNCE);
    assert!(result.is_err());
}
