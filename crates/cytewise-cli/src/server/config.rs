//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Where the HTTP service listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Build a config from a host string and port.
    pub fn new(host: &str, port: u16) -> Result<Self, String> {
        let host = host
            .parse()
            .map_err(|_| format!("Invalid host address: {}", host))?;
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
