//! Headless host bridge binary for stdin/stdout JSON communication.
//!
//! Reads `CommandEnvelope` messages as newline-delimited JSON from stdin and
//! writes one `ResponseEnvelope` per command to stdout.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean JSON protocol channel.

use heartline::HeartlineConfig;
use heartline::classifier::EmotionDetector;
use heartline::host::HostRouter;
use heartline::host::stdio::run_stdio_bridge;
use std::path::PathBuf;

/// Environment variable that overrides the config file location.
const CONFIG_ENV: &str = "HEARTLINE_CONFIG";

fn load_config() -> anyhow::Result<HeartlineConfig> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(HeartlineConfig::default_config_path);

    let config = if path.exists() {
        tracing::info!(path = %path.display(), "loading config");
        HeartlineConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()))?
    } else {
        tracing::info!(path = %path.display(), "no config file; using defaults");
        HeartlineConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing to stderr only (stdout is reserved for the JSON
    // protocol).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("heartline=info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "heartline-host starting");

    let config = load_config()?;
    let detector = EmotionDetector::from_config(&config.detector).map_err(|e| {
        tracing::error!(error = %e, "response catalog failed validation");
        anyhow::anyhow!("heartline-host failed to start: {e}")
    })?;
    tracing::info!(buckets = detector.catalog().len(), "response catalog ready");

    run_stdio_bridge(HostRouter::new(detector, config.host))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "heartline-host exited with error");
            anyhow::anyhow!("heartline-host failed: {e}")
        })?;

    tracing::info!("heartline-host shut down cleanly");
    Ok(())
}
