use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub log_queries: bool,

    #[serde(default = "default_records_file")]
    pub records_file: String,

    /// Read and write timeout for each upstream exchange, in seconds.
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            log_queries: false,
            records_file: default_records_file(),
            upstream_timeout: default_upstream_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        if self.listen.contains(':') {
            format!("[{}]:{}", self.listen, self.port)
        } else {
            format!("{}:{}", self.listen, self.port)
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_records_file() -> String {
    "configs/records.toml".to_string()
}

fn default_upstream_timeout() -> u64 {
    5
}
