//! LiveScoreTracker - Main Entry Point
//!
//! A Rust service that tracks live events and periodically forwards their
//! current scores to a Kafka topic.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use live_score_tracker::api::client::LiveScoreApiClient;
use live_score_tracker::config::loader::load_config;
use live_score_tracker::http;
use live_score_tracker::publish::kafka::KafkaScorePublisher;
use live_score_tracker::tracker::cycle::PollPublishCycle;
use live_score_tracker::tracker::registry::TrackingRegistry;
use live_score_tracker::tracker::retry::RetryPolicy;
use live_score_tracker::tracker::scheduler::FixedRateScheduler;

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Serve the mock score endpoint alongside the control surface
    #[arg(long)]
    with_mock_scores: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting live score tracker");
    info!("Configuration file: {}", args.config);

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config))?;

    let source = LiveScoreApiClient::with_timeout(
        &config.score_api.base_url,
        config.score_api.request_timeout(),
    )?;
    let publisher = KafkaScorePublisher::with_delivery_timeout(
        &config.kafka.brokers,
        &config.kafka.topic,
        config.kafka.delivery_timeout(),
    )?;

    let retry = RetryPolicy::new(
        config.tracker.retry_max_attempts,
        config.tracker.retry_delay(),
    );
    let cycle = Arc::new(PollPublishCycle::new(
        Arc::new(source),
        Arc::new(publisher),
        retry,
    ));
    let registry = Arc::new(TrackingRegistry::new(
        Arc::new(FixedRateScheduler::new()),
        cycle,
        config.tracker.poll_interval(),
    ));

    let state = Arc::new(http::AppState {
        registry: registry.clone(),
    });
    let mut app = http::router(state);
    if args.with_mock_scores {
        info!("Serving mock score endpoint at /mock/status/{{eventId}}");
        app = app.merge(http::mock::router());
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Control surface listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Received shutdown signal, cancelling tracked jobs...");
    registry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
