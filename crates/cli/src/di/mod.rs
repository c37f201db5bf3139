mod dns;
mod jobs;
mod records;

pub use dns::DnsServices;
pub use jobs::build_jobs;
pub use records::RecordServices;
