mod reload;

pub use reload::{ConfigReload, ReloadConfigUseCase};
