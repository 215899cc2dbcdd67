use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use sea_orm::DatabaseConnection;
use service::reminder::{ReminderSweeper, StoreNotifier, SweepConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool described by `[database]` and apply pending migrations.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(cfg).await?;
    models::db::migrate(&db).await?;
    Ok(db)
}

/// Router with CORS and request tracing, ready to serve.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: connect, start the reminder sweep, and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = connect_and_migrate(&cfg.database).await?;
    let state = ServerState::new(db);

    let sweeper = if cfg.reminders.enabled {
        let notifier = Arc::new(StoreNotifier::new(Arc::clone(&state.notifications)));
        let sweeper = ReminderSweeper::new(state.db.clone(), notifier, SweepConfig::from(&cfg.reminders));
        Some(sweeper.spawn())
    } else {
        info!(event = "reminder_sweeper_disabled");
        None
    };

    let app = build_app(state);
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(event = "listening", %addr, "cmms server accepting connections");

    let served = axum::serve(listener, app).with_graceful_shutdown(shutdown).await;

    if let Some(handle) = sweeper {
        handle.abort();
        info!(event = "reminder_sweeper_stopped");
    }
    served?;
    Ok(())
}
