use std::net::{Ipv4Addr, SocketAddr};

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0:?}")]
    InvalidHost(String),

    #[error("PORT is not in the correct format: {0:?}")]
    InvalidPort(String),
}

/// Where the server listens. Read from `HOST` and `PORT`, `.env` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
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
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Unset values fall back to `0.0.0.0:4000`.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = match host {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
