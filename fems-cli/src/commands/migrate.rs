//! Create the workout schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use fems_server::db::migrations;

use super::database::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    migrations::run(&pool)
        .await
        .context("Failed to migrate database")?;

    pool.close().await;
    println!("Workout schema is up to date");
    Ok(())
}
