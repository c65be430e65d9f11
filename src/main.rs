use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use event_reminder::config::{Config, StoreBackend};
use event_reminder::modules::events::store::EventStore;
use event_reminder::modules::events::store::in_memory::InMemoryEventStore;
use event_reminder::modules::events::store::sqlite::SqliteEventStore;
use event_reminder::shell::http::router;
use event_reminder::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store: Arc<dyn EventStore> = match config.store {
        StoreBackend::InMemory => Arc::new(InMemoryEventStore::new()),
        StoreBackend::Sqlite => Arc::new(SqliteEventStore::open(&config.database_path)?),
    };
    tracing::info!(backend = ?config.store, "event store ready");

    let app = router(AppState::new(store)).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("event API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
