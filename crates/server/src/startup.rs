use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: Option<&configs::AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate().ok();

    // DB connection, pool-tuned when a config file is present
    let db = match cfg.as_ref() {
        Some(cfg) => models::db::connect_with_config(&cfg.database).await?,
        None => models::db::connect().await?,
    };

    // Create the schema on first start; a no-op when the tables already exist
    migration::Migrator::up(&db, None).await?;
    info!("database schema ready");

    // Static assets (product imagery) served under /static
    let static_dir = cfg
        .as_ref()
        .map(|c| c.server.static_dir.clone())
        .or_else(|| env::var("STATIC_DIR").ok())
        .unwrap_or_else(|| "static".to_string());
    tokio::fs::create_dir_all(&static_dir).await?;

    let state = ServerState { db };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors, &static_dir);

    // Bind and serve
    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, static_dir = %static_dir, "starting catalog api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
