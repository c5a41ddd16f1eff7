//! Service entry point

use anyhow::Context;
use campus_answers::api::{build_router, AppState};
use campus_answers::config::Config;
use campus_answers::dataset::{load_dataset, DatasetManifest};
use campus_answers::matcher::Matcher;
use campus_answers::metrics::METRICS;
use campus_answers::syllabus::SyllabusCatalog;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!("Starting campus-answers");

    // Load the dataset exactly once; a missing directory is fatal
    let manifest = DatasetManifest::scan(
        Path::new(&config.dataset.dir),
        &config.dataset.excluded_file,
    )
    .context("Dataset directory unavailable")?;
    let dataset = load_dataset(&manifest)?;
    METRICS.record_dataset_load(dataset.len(), dataset.skipped_sources());

    let catalog = match &config.syllabus.catalog_path {
        Some(path) => SyllabusCatalog::from_file(Path::new(path))
            .context("Failed to load syllabus catalog")?,
        None => SyllabusCatalog::builtin(),
    };

    let state = AppState {
        dataset: Arc::new(dataset),
        matcher: Arc::new(Matcher::new(config.matcher.clone())),
        catalog: Arc::new(catalog),
        page: config.page.clone(),
    };

    let app = build_router(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
