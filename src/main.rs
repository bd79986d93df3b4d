//! Vivid UI Gallery - Main Entry Point
//!
//! Shows every button and input variant against the installed theme.

use vivid_ui::app::application::run_app;
use vivid_ui::helpers::is_development;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(development = is_development(), "Starting Vivid UI gallery...");

    run_app();
}
