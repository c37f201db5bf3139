pub mod handle_dns_query;
pub mod local_answer;
pub mod record_type_map;
pub mod reply;

pub use handle_dns_query::{HandleDnsQueryUseCase, QueryOutcome};
pub use record_type_map::RecordTypeMapper;
