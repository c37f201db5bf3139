pub mod config_watch;
pub mod records_watch;
pub mod runner;

pub use config_watch::ConfigWatchJob;
pub use records_watch::RecordsWatchJob;
pub use runner::JobRunner;
