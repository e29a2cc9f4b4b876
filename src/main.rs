#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::prelude::*;

use wanderlust::serve;
use wanderlust::storage::Config;
use wanderlust::storage::Memory;
use wanderlust::storage::Postgres;
use wanderlust::utils::env_var_or_else;
use wanderlust::utils::non_empty_env_var;

const DEFAULT_RUST_LOG: &str = "wanderlust=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:6000";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let address = setup_address()?;

    match Config::DetectConfig.resolve() {
        Config::Postgres(database_url) => {
            let storage = Postgres::connect(&database_url).await?;
            tracing::info!("Using Postgres storage");

            serve(storage, address).await
        }
        Config::InMemory | Config::DetectConfig => {
            tracing::info!("`DATABASE_URL` is not set, using in-memory storage");

            serve(Memory::new(), address).await
        }
    }
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(env_var_or_else("RUST_LOG", || {
            DEFAULT_RUST_LOG.into()
        })))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Some(port) = non_empty_env_var("PORT") {
        address.set_port(port.parse::<u16>()?);
    }

    Ok(address)
}
