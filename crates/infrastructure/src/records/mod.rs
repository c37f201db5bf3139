pub mod toml_source;
pub mod watcher;

pub use toml_source::TomlRecordSource;
pub use watcher::{FileWatcher, DEFAULT_DEBOUNCE};
