use config::{ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Reported by the health endpoint
    pub name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 6969)?
            .set_default("server.workers", 4)?
            // Service identity
            .set_default("service.name", "AI Financial Risk Engine")?;

        builder = builder.add_source(Environment::with_prefix("RISK_API").separator("__"));

        // Plain PORT wins over the prefixed variable
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 6969,
                workers: 4,
            },
            service: ServiceConfig {
                name: "AI Financial Risk Engine".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Reads the real environment; only assert on keys tests never set.
        let config = Config::from_env().unwrap();
        assert_eq!(config.server.host, Config::default().server.host);
        assert!(config.server.workers > 0);
    }
}
