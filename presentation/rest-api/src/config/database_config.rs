use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::{env, path::Path, time::Duration};

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 10)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: Wait for a free connection (default: 30)
/// - DATABASE_MIGRATIONS_PATH: Migration directory (default: ./infrastructure/persistence/migrations)
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Self::from_values(
            url,
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_ACQUIRE_TIMEOUT_SECS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        url: String,
        max_connections: Option<String>,
        acquire_timeout_secs: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut pool = DatabaseConfig::new(url);
        if let Some(raw) = max_connections {
            pool.max_connections = raw
                .parse()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {}", raw))?;
        }
        if let Some(raw) = acquire_timeout_secs {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("Invalid DATABASE_ACQUIRE_TIMEOUT_SECS: {}", raw))?;
            pool.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            pool,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Connects the pool and applies pending migrations.
///
/// A missing migrations directory is skipped with a warning so the binary
/// can run against an already provisioned schema.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool).await?;

    if Path::new(&settings.migrations_path).exists() {
        run_migrations(&pool, &settings.migrations_path).await?;
        tracing::info!(path = %settings.migrations_path, "Migrations applied");
    } else {
        tracing::warn!(path = %settings.migrations_path, "Migrations directory not found, skipping");
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults_when_optional_values_missing() {
        let settings =
            DatabaseSettings::from_values("postgres://localhost/shop".to_string(), None, None, None)
                .unwrap();

        assert_eq!(settings.pool.max_connections, 10);
        assert_eq!(settings.pool.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_override_pool_settings() {
        let settings = DatabaseSettings::from_values(
            "postgres://localhost/shop".to_string(),
            Some("25".to_string()),
            Some("5".to_string()),
            Some("/srv/migrations".to_string()),
        )
        .unwrap();

        assert_eq!(settings.pool.max_connections, 25);
        assert_eq!(settings.pool.acquire_timeout, Duration::from_secs(5));
        assert_eq!(settings.migrations_path, "/srv/migrations");
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result = DatabaseSettings::from_values(
            "postgres://localhost/shop".to_string(),
            Some("many".to_string()),
            None,
            None,
        );

        assert!(result.is_err());
    }
}
