use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamProtocol {
    #[default]
    Udp,

    Tcp,
}

impl UpstreamProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
        }
    }
}

impl fmt::Display for UpstreamProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `[upstreams.<name>]` table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub protocol: UpstreamProtocol,
}

/// A named upstream resolver, read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub name: Arc<str>,

    pub address: String,

    pub port: u16,

    pub transport: UpstreamProtocol,
}

impl UpstreamTarget {
    pub fn new(name: impl Into<Arc<str>>, config: UpstreamConfig) -> Self {
        Self {
            name: name.into(),
            address: config.address,
            port: config.port,
            transport: config.protocol,
        }
    }

    /// `host:port`, bracketing IPv6 literals.
    pub fn endpoint(&self) -> String {
        if self.address.contains(':') && !self.address.starts_with('[') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }
}

impl fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoint = self.endpoint();
        write!(f, "{} ({}://{})", self.name, self.transport, endpoint)
    }
}

/// Reads the `upstreams` table keeping the order of the document, so the
/// first upstream written is the first one used.
pub(crate) fn deserialize_ordered<'de, D>(deserializer: D) -> Result<Vec<UpstreamTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedUpstreams;

    impl<'de> Visitor<'de> for OrderedUpstreams {
        type Value = Vec<UpstreamTarget>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of upstream name to { address, port, protocol }")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut targets = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, config)) = map.next_entry::<String, UpstreamConfig>()? {
                targets.push(UpstreamTarget::new(name, config));
            }
            Ok(targets)
        }
    }

    deserializer.deserialize_map(OrderedUpstreams)
}

fn default_port() -> u16 {
    53
}
