//! Fixed bind address and service identity.
//! Used by: main, server, console, handlers::health.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

/// Value reported in the `service` field of the health payload.
pub const SERVICE_NAME: &str = "python-backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Browser-friendly URL for the banner. The wildcard host is not dialable.
    pub fn display_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
