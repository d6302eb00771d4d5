use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use event_catalog::modules::events::adapters::outbound::events_remote::EventsRemote;
use event_catalog::modules::events::adapters::outbound::events_remote_http::HttpEventsRemote;
use event_catalog::modules::events::adapters::outbound::events_remote_in_memory::InMemoryEventsRemote;
use event_catalog::shared::config::Config;
use event_catalog::shell::http::router;
use event_catalog::shell::state::AppState;
use event_catalog::shell::workers::spawn_browser_sync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let remote: Arc<dyn EventsRemote> = match &config.api_url {
        Some(url) => {
            info!(%url, "using events API");
            Arc::new(HttpEventsRemote::new(url.clone(), config.api_timeout)?)
        }
        None => {
            info!("EVENTS_API_URL not set, using in-memory events");
            Arc::new(InMemoryEventsRemote::new())
        }
    };

    let state = AppState::new(remote, config.page_increment);
    let _browser_sync = spawn_browser_sync(&state);
    let _initial_fetch = state.store.spawn_fetch();

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!("event catalog listening on http://{}", config.bind);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
