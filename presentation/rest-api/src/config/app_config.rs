use business::domain::cart::policy::CartPolicy;
use poem::middleware::Cors;

use super::{
    cart_config, cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub cart_policy: CartPolicy,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            cart_policy: cart_config::load_cart_policy()?,
        })
    }
}
