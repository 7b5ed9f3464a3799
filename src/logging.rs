//! Subscriber setup for hosts that want this crate's logs on stderr.

use color_eyre::eyre::Result;
use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber. `RUST_LOG` overrides `default_level`; `json`
/// switches to one JSON object per line.
pub fn init_logging(default_level: Level, json: bool) -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    if json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()?;
    }
    Ok(())
}
