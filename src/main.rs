//! Udupi Guide desktop entry point

use tracing_subscriber::EnvFilter;
use udupi_guide::app::App;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,udupi_guide=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Udupi Guide v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}
