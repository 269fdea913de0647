use std::env;
use std::path::PathBuf;
use std::time::Duration;

use poller::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "./config.toml".to_string());
    let data_path = PathBuf::from(env::var("DATA_PATH").unwrap_or_else(|_| "./data".to_string()));
    let poll_interval = Duration::from_secs(
        env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()?,
    );
    let once = env::args().any(|arg| arg == "--once");

    let config = Config::from_toml_file(&config_path)?;
    tracing::info!(
        "Loaded {} services from {}",
        config.services.len(),
        config_path
    );

    poller::run(config, &data_path, poll_interval, once).await
}
