use async_trait::async_trait;
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use relay_dns_application::ports::SourceWatcher;
use relay_dns_domain::DomainError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Quiet period after the last file event before a change is reported.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Reports debounced changes to a single file.
///
/// The parent directory is watched rather than the file itself so that
/// editors replacing the file by rename are still seen.
pub struct FileWatcher {
    path: PathBuf,
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: mpsc::Receiver<()>,
}

impl FileWatcher {
    pub fn watch(path: impl AsRef<Path>, debounce: Duration) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let file_name: OsString = path
            .file_name()
            .ok_or_else(|| {
                DomainError::WatchFailed(format!("{} does not name a file", path.display()))
            })?
            .to_os_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // One pending notification is enough; further changes coalesce.
        let (tx, rx) = mpsc::channel(1);

        let mut debouncer = new_debouncer(debounce, move |result: DebounceEventResult| {
            match result {
                Ok(events) => {
                    if events
                        .iter()
                        .any(|event| event.path.file_name() == Some(file_name.as_os_str()))
                    {
                        let _ = tx.try_send(());
                    }
                }
                Err(e) => warn!(error = %e, "File watcher error"),
            }
        })
        .map_err(|e| DomainError::WatchFailed(format!("Failed to create file watcher: {}", e)))?;

        debouncer
            .watcher()
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                DomainError::WatchFailed(format!("Failed to watch {}: {}", dir.display(), e))
            })?;

        debug!(path = %path.display(), dir = %dir.display(), "Watching file");

        Ok(Self {
            path,
            _debouncer: debouncer,
            rx,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SourceWatcher for FileWatcher {
    async fn changed(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}
