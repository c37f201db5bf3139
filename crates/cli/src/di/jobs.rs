use super::{DnsServices, RecordServices};
use relay_dns_application::use_cases::ReloadConfigUseCase;
use relay_dns_domain::{CliOverrides, Config};
use relay_dns_infrastructure::records::{FileWatcher, DEFAULT_DEBOUNCE};
use relay_dns_jobs::{ConfigWatchJob, JobRunner, RecordsWatchJob};
use std::sync::Arc;
use tracing::warn;

/// Wires a watcher job for the records file and for the config file. A
/// watcher that cannot be set up only disables hot-reload for its file.
pub fn build_jobs(
    config_path: &str,
    cli_overrides: CliOverrides,
    config: &Config,
    records: &RecordServices,
    dns: &DnsServices,
) -> JobRunner {
    let mut runner = JobRunner::new();

    match FileWatcher::watch(records.source.path(), DEFAULT_DEBOUNCE) {
        Ok(watcher) => {
            runner = runner.with_records_watch(RecordsWatchJob::new(
                records.reload.clone(),
                Box::new(watcher),
            ));
        }
        Err(e) => warn!(error = %e, "Records hot-reload disabled"),
    }

    match FileWatcher::watch(config_path, DEFAULT_DEBOUNCE) {
        Ok(watcher) => {
            let reload_config = Arc::new(ReloadConfigUseCase::new(
                config_path,
                cli_overrides,
                config.clone(),
            ));
            runner = runner.with_config_watch(ConfigWatchJob::new(
                reload_config,
                records.reload.clone(),
                dns.query_handler.clone(),
                Box::new(watcher),
            ));
        }
        Err(e) => warn!(error = %e, "Config hot-reload disabled"),
    }

    runner
}
