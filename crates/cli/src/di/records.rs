use relay_dns_application::services::RecordStore;
use relay_dns_application::use_cases::ReloadRecordsUseCase;
use relay_dns_domain::Config;
use relay_dns_infrastructure::records::TomlRecordSource;
use std::sync::Arc;
use tracing::warn;

pub struct RecordServices {
    pub source: Arc<TomlRecordSource>,
    pub store: Arc<RecordStore>,
    pub reload: Arc<ReloadRecordsUseCase>,
}

impl RecordServices {
    pub fn new(config: &Config) -> Self {
        let source = Arc::new(TomlRecordSource::new(&config.server.records_file));
        let store = Arc::new(RecordStore::empty());
        let reload = Arc::new(ReloadRecordsUseCase::new(source.clone(), store.clone()));

        Self {
            source,
            store,
            reload,
        }
    }

    /// Initial load. A broken records file is not fatal: the server starts
    /// with no local records and picks the file up on the next change.
    pub async fn load_initial(&self) {
        if self.reload.execute().await.is_err() {
            warn!(
                path = %self.source.path().display(),
                "Starting without local records"
            );
        }
    }
}
