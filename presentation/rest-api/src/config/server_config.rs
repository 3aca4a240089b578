use anyhow::Context;
use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SERVICE_PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bind_to_localhost_8080_by_default() {
        let config = ServerConfig::from_values(None, None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_use_configured_ip_and_port() {
        let config =
            ServerConfig::from_values(Some("0.0.0.0".to_string()), Some("9000".to_string()))
                .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn should_reject_port_out_of_range() {
        assert!(ServerConfig::from_values(None, Some("70000".to_string())).is_err());
    }
}
