//! Schema maintenance for the services database.
//!
//! ```sh
//! manage create          # create the `services` table
//! manage seed            # insert the two sample services
//! manage drop            # drop the `services` table
//! manage --config /etc/services/config.toml seed
//! ```

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "manage", version, about = "Maintenance commands for the services database")]
struct Cli {
    /// Path to the configuration file (TOML). Defaults to `config.toml` when present.
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Create the schema.
    Create,
    /// Insert the sample rows.
    Seed,
    /// Drop the schema.
    Drop,
}

async fn execute(command: Command, db: &DatabaseConnection) -> anyhow::Result<()> {
    match command {
        Command::Create => catalog::maintenance::create_schema(db).await?,
        Command::Seed => {
            for created in catalog::maintenance::seed(db).await? {
                info!(id = created.id, name = %created.name, "seeded service");
            }
        }
        Command::Drop => catalog::maintenance::drop_schema(db).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let cfg = match configs::AppConfig::load_and_validate_from(cli.config.as_deref()) {
        Ok(cfg) => {
            server::startup::init_logging(&cfg);
            cfg
        }
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let db = match models::db::connect_with_config(&cfg.database).await {
        Ok(db) => db,
        Err(e) => {
            error!(event = "db_connect_failed", error = %e, "cannot connect to database");
            return std::process::ExitCode::FAILURE;
        }
    };

    match execute(cli.command, &db).await {
        Ok(()) => {
            info!(command = ?cli.command, "done");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(command = ?cli.command, error = %e, "command failed");
            std::process::ExitCode::FAILURE
        }
    }
}
