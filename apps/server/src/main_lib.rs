use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use ipotracker_core::ipos::{IpoService, IpoServiceTrait};
use ipotracker_storage_sqlite::{db, IpoRepository};

pub struct AppState {
    pub ipo_service: Arc<dyn IpoServiceTrait + Send + Sync>,
    /// Fixed, pre-known location of the CSV source file.
    pub csv_path: PathBuf,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("IPOT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;

    let ipo_repository = Arc::new(IpoRepository::new(pool));
    let ipo_service = Arc::new(IpoService::new(ipo_repository));

    Ok(Arc::new(AppState {
        ipo_service,
        csv_path: PathBuf::from(&config.csv_path),
        db_path: config.db_path.clone(),
    }))
}
