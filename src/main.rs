use clockrep::commands::Cli;
use clockrep::libs::messages::macros::{is_debug_mode, DEBUG_ENV};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        // CLOCKREP_DEBUG alone means debug level for this crate
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clockrep=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
        tracing::debug!(env = DEBUG_ENV, "debug output enabled");
    }

    Cli::menu().await
}
