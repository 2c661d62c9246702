//! Database connection flags shared by every command that talks to Postgres

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use fems_server::db::{create_pool, DatabaseConfig, PgPool};

/// Database connection arguments
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (also read from DATABASE_URL or a .env file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum open connections in the pool
    #[arg(long, env = "FEMS_DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub max_connections: u32,

    /// Idle connections kept open
    #[arg(long, env = "FEMS_DB_MIN_CONNECTIONS", default_value_t = 10)]
    pub min_connections: u32,

    /// Seconds before an idle connection is closed
    #[arg(long, env = "FEMS_DB_IDLE_TIMEOUT_SECS", default_value_t = 60)]
    pub idle_timeout_secs: u64,
}

impl DatabaseArgs {
    /// Resolve into a pool config; a missing URL is an error.
    pub fn config(&self) -> Result<DatabaseConfig> {
        let url = self
            .database_url
            .clone()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        Ok(DatabaseConfig {
            url,
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
        })
    }

    /// Connect using these arguments.
    pub async fn connect(&self) -> Result<PgPool> {
        let config = self.config()?;
        create_pool(&config)
            .await
            .context("Failed to create database pool")
    }
}
