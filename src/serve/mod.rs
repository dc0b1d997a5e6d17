// src/serve/mod.rs

use anyhow::{Context, Result};
use tracing::info;
use warp::{Filter, Rejection, Reply};

/// `GET /` serves the prebuilt dashboard; `GET /healthz` reports liveness.
/// The page is rendered once at startup, so every client gets the same
/// payload.
pub fn routes(page: String) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let dashboard = warp::path::end().map(move || warp::reply::html(page.clone()));

    let health = warp::path("healthz").and(warp::path::end()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "service": "broadstreet-dashboard",
        }))
    });

    warp::get().and(dashboard.or(health))
}

/// Bind on localhost and serve until the process is killed.
pub async fn run(port: u16, page: String) -> Result<()> {
    let (addr, server) = warp::serve(routes(page))
        .try_bind_ephemeral(([127, 0, 0, 1], port))
        .with_context(|| format!("binding 127.0.0.1:{port}"))?;
    info!("dashboard up at http://{addr}/");
    server.await;
    Ok(())
}
