use crate::{ConfigWatchJob, RecordsWatchJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(RecordsWatchJob);
impl_spawnable_job!(ConfigWatchJob);

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &Option<CancellationToken>,
) -> Option<JoinHandle<()>> {
    let job = job?;
    let job = match shutdown {
        Some(token) => job.with_cancellation(token.clone()),
        None => job,
    };
    Some(Arc::new(job).start_job())
}

pub struct JobRunner {
    records_watch: Option<RecordsWatchJob>,
    config_watch: Option<ConfigWatchJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            records_watch: None,
            config_watch: None,
            shutdown: None,
        }
    }

    pub fn with_records_watch(mut self, job: RecordsWatchJob) -> Self {
        self.records_watch = Some(job);
        self
    }

    pub fn with_config_watch(mut self, job: ConfigWatchJob) -> Self {
        self.config_watch = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawns every configured job and returns their handles.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let handles: Vec<JoinHandle<()>> = [
            spawn_job(self.records_watch, &self.shutdown),
            spawn_job(self.config_watch, &self.shutdown),
        ]
        .into_iter()
        .flatten()
        .collect();

        info!(jobs = handles.len(), "Background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
