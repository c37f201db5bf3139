use relay_dns_application::ports::SourceWatcher;
use relay_dns_application::use_cases::ReloadRecordsUseCase;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Reloads local records whenever the records source changes.
pub struct RecordsWatchJob {
    reload: Arc<ReloadRecordsUseCase>,
    watcher: Mutex<Box<dyn SourceWatcher>>,
    shutdown: CancellationToken,
}

impl RecordsWatchJob {
    pub fn new(reload: Arc<ReloadRecordsUseCase>, watcher: Box<dyn SourceWatcher>) -> Self {
        Self {
            reload,
            watcher: Mutex::new(watcher),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!("Starting records watch job");

        let mut watcher = self.watcher.lock().await;
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RecordsWatchJob: shutting down");
                    break;
                }
                changed = watcher.changed() => {
                    if !changed {
                        warn!("Records watcher stopped, hot-reload disabled");
                        break;
                    }
                    // Failures are logged by the use case; the previous set stays active.
                    let _ = self.reload.execute().await;
                }
            }
        }
    }
}
