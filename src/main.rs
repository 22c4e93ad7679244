use chrono::Local;
use habit_flow::events::EventStore;
use habit_flow::{AppState, CalendarState, Config, demo, router};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    info!(
        theme = config.theme.name,
        seed = config.demo_seed,
        "starting habit flow"
    );

    let overview = demo::generate(config.demo_seed);
    let events = EventStore::with_events(demo::starter_schedule());
    let calendar = CalendarState::new(Local::now().date_naive());

    let port = config.port;
    let state = AppState::new(config, calendar, events, overview);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
}
