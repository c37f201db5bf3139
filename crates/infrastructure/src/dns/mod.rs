pub mod forwarding;
pub mod server;
pub mod transport;

pub use forwarding::DnsForwarder;
pub use server::DnsServerHandler;
