use crate::ports::RecordSource;
use crate::services::RecordStore;
use relay_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReloadRecordsUseCase {
    source: Arc<dyn RecordSource>,
    store: Arc<RecordStore>,
}

impl ReloadRecordsUseCase {
    pub fn new(source: Arc<dyn RecordSource>, store: Arc<RecordStore>) -> Self {
        Self { source, store }
    }

    /// Loads the source and swaps the result in. On failure the active set
    /// is left untouched.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        match self.source.load().await {
            Ok(set) => {
                let count = self.store.replace(set);
                info!(
                    source = %self.source.location(),
                    records = count,
                    "Local records loaded"
                );
                Ok(count)
            }
            Err(e) => {
                warn!(
                    source = %self.source.location(),
                    error = %e,
                    retained = self.store.len(),
                    "Failed to reload local records, keeping previous set"
                );
                Err(e)
            }
        }
    }
}
