//! HTTP server command for the workout API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use fems_server::db::{migrations, PgWorkoutStore};
use fems_server::http::{run_server, ServerConfig};

use super::database::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "FEMS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Seconds a request may take before it is answered with 408
    #[arg(
        long,
        env = "FEMS_REQUEST_TIMEOUT_SECS",
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: u64,

    /// Skip creating the workout tables on startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting fems server on {}", args.bind);

    let pool = args.database.connect().await?;

    if !args.skip_migrations {
        migrations::run(&pool)
            .await
            .context("Failed to migrate database")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout_secs),
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgWorkoutStore::new(pool.clone())), config)
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
