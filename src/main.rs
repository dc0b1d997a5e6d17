use anyhow::{Context, Result};
use broadstreet::{figures, ingest::Datasets, page, serve, series};
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PORT: u16 = 8050;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let data_dir = env::var("BROADSTREET_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
    let port = match env::var("BROADSTREET_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("BROADSTREET_PORT is not a port number: {raw:?}"))?,
        Err(_) => DEFAULT_PORT,
    };

    // ─── 3) load datasets ────────────────────────────────────────────
    let mut data = Datasets::load(&data_dir)
        .with_context(|| format!("loading datasets from {}", data_dir.display()))?;

    // ─── 4) derive series ────────────────────────────────────────────
    series::sort_chronologically(&mut data.daily);
    let daily = series::running_totals(&data.daily);
    info!(days = daily.len(), "computed running totals");

    // ─── 5) build figures + page ─────────────────────────────────────
    let figure_set = figures::build_all(&data, &daily);
    let html = page::render(&data, &daily, &figure_set);
    info!(bytes = html.len(), "assembled dashboard page");

    // ─── 6) serve ────────────────────────────────────────────────────
    serve::run(port, html).await
}
