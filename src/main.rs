//! Beacon Admin - Main Entry Point
//!
//! Native operations dashboard for influencer-marketing agencies.

use beacon_admin::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Beacon Admin...");

    // Run the GPUI application
    run_app();
}
