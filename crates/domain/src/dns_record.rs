pub mod definition;
pub mod entry;
pub mod record_type;

pub use definition::{RecordDefinition, RecordsDocument};
pub use entry::{MxValue, RecordEntry, DEFAULT_MX_PRIORITY, MAX_TXT_SEGMENT};
pub use record_type::RecordType;
