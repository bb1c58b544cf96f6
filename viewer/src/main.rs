use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use viewport::{read_maptiler_source, HttpFetcher, ViewerConfig, ViewportLog};

#[async_std::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    // loads from .env file, then the process environment
    let config = ViewerConfig::from_env()?;
    info!(url = %config.source_url, "reading maptiler source");

    let fetcher = HttpFetcher::new(config.fetch_timeout);
    let descriptor =
        match read_maptiler_source(fetcher, &config.source_url, config.extractor()).await {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!(url = %config.source_url, "could not read viewport: {e}");
                return Err(e.into());
            }
        };

    let mut log = ViewportLog::default();
    let snapshot = log.apply_descriptor(descriptor);
    info!(
        center = ?snapshot.center,
        zoom = %snapshot.zoom,
        bounds = ?snapshot.bounds,
        "viewport applied"
    );

    let settled = log.settle(config.settle_delay).await;
    info!(loaded = settled.loaded, "viewport settled");

    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
