use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "SKYTRAQ_LOGLEVEL";

/// Logs to stderr, filtered by `RUST_LOG`, then `SKYTRAQ_LOGLEVEL`, then `skytraq=info`
pub fn initialize() -> anyhow::Result<()> {
    let filter = std::env::var(EnvFilter::DEFAULT_ENV)
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| "skytraq=info,skytraq_cli=info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_new(filter)?)
        .try_init()?;
    Ok(())
}
