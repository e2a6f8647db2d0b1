//! Configuration for pmsbridge
//!
//! Centralized configuration with sensible defaults.

use crate::protocol::constants::{DEFAULT_DEST_ADDR, DEFAULT_SRC_ADDR};

/// Main configuration for a bridge client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Target Configuration
    // -------------------------------------------------------------------------
    /// PMS server host name or IP address
    pub server_host: String,

    /// PMS server TCP port
    pub server_port: u16,

    // -------------------------------------------------------------------------
    // Addressing Configuration
    // -------------------------------------------------------------------------
    /// Destination address used when a request does not carry one
    pub default_dest_addr: String,

    /// Source address used when a request does not carry one
    pub default_src_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3001,
            default_dest_addr: DEFAULT_DEST_ADDR.to_string(),
            default_src_addr: DEFAULT_SRC_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured PMS server as a transport target
    pub fn target(&self) -> crate::Target {
        crate::Target::new(self.server_host.clone(), self.server_port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the PMS server host
    pub fn server_host(mut self, host: impl Into<String>) -> Self {
        self.config.server_host = host.into();
        self
    }

    /// Set the PMS server port
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Set the fallback destination address
    pub fn default_dest_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.default_dest_addr = addr.into();
        self
    }

    /// Set the fallback source address
    pub fn default_src_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.default_src_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
