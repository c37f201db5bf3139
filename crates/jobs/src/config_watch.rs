use relay_dns_application::ports::SourceWatcher;
use relay_dns_application::use_cases::{
    HandleDnsQueryUseCase, ReloadConfigUseCase, ReloadRecordsUseCase,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Re-reads the main config file on change.
///
/// Query logging follows the new file immediately; every successful reload
/// also reloads local records.
pub struct ConfigWatchJob {
    reload_config: Arc<ReloadConfigUseCase>,
    reload_records: Arc<ReloadRecordsUseCase>,
    queries: Arc<HandleDnsQueryUseCase>,
    watcher: Mutex<Box<dyn SourceWatcher>>,
    shutdown: CancellationToken,
}

impl ConfigWatchJob {
    pub fn new(
        reload_config: Arc<ReloadConfigUseCase>,
        reload_records: Arc<ReloadRecordsUseCase>,
        queries: Arc<HandleDnsQueryUseCase>,
        watcher: Box<dyn SourceWatcher>,
    ) -> Self {
        Self {
            reload_config,
            reload_records,
            queries,
            watcher: Mutex::new(watcher),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(path = %self.reload_config.path(), "Starting config watch job");

        let mut watcher = self.watcher.lock().await;
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("ConfigWatchJob: shutting down");
                    break;
                }
                changed = watcher.changed() => {
                    if !changed {
                        warn!("Config watcher stopped, config hot-reload disabled");
                        break;
                    }
                    self.apply().await;
                }
            }
        }
    }

    async fn apply(&self) {
        match self.reload_config.execute() {
            Ok(reload) => {
                self.queries
                    .set_query_logging(reload.config.server.log_queries);
                let _ = self.reload_records.execute().await;
            }
            Err(e) => {
                warn!(
                    path = %self.reload_config.path(),
                    error = %e,
                    "Ignoring invalid configuration change"
                );
            }
        }
    }
}
