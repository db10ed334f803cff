mod config;
mod db;
mod entities;
mod error;
mod models;
mod query;
mod routes;
mod seed;
mod store;

use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::TitleStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: TitleStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,catalogd=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = TitleStore::new(db);

    // Destructive reseed is opt-in and finishes before the listener binds.
    if config.reset_db {
        seed::reseed(&store).await?;
    }

    let state = Arc::new(AppState { config: config.clone(), store });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
