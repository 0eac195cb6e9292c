//! Binary crate for the weather web front-end.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Serving the search form over HTTP
//! - Rendering pipeline output as HTML

use clap::Parser;
use std::net::SocketAddr;
use tracing::warn;
use weather_core::{ProviderConfig, WeatherClient};

mod render;
mod routes;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Weather web front-end")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5001")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_web=info,weather_core=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = ProviderConfig::from_env();
    if config.api_key.is_none() {
        warn!(
            "{} is not set, lookups will report a missing key",
            weather_core::config::API_KEY_VAR
        );
    }

    let client = WeatherClient::new(config);

    routes::serve(args.bind, client).await
}
