//! Seeds the Pro-Mata baseline catalog.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use std::process::ExitCode;

use dotenvy::dotenv;
use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok(); // .env is optional

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Seed failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn seed() -> anyhow::Result<()> {
    let config = SeedConfig::from_env();
    tracing::info!("Connecting to database at {}", config.redacted_url());

    let pool = config.connect().await?;
    tracing::info!("Connected to database");

    let result = Seeder::new(PgStore::new(pool)).run_and_close().await?;

    // Summary output
    tracing::info!("Seed completed successfully!");
    tracing::info!("  Admin: {}", result.admin.email);
    tracing::info!("  Center: {}", result.center.name);
    tracing::info!("  Accommodations: {}", result.accommodations.len());
    tracing::info!("  Activity types: {}", result.activity_types.len());
    tracing::info!("  Settings: {}", result.setting.key);

    Ok(())
}
