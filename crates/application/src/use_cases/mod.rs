pub mod config;
pub mod dns;
pub mod records;

pub use config::{ConfigReload, ReloadConfigUseCase};
pub use dns::{HandleDnsQueryUseCase, QueryOutcome};
pub use records::ReloadRecordsUseCase;
