use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_city_admin::{
    config::AppConfig,
    models::StockKind,
    navigation::{History, LOGIN_ROUTE},
    notify::ToastLog,
    state::AppState,
    storage::FileStore,
    views::dashboard::Dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,smart_city_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(api = %config.api_url, session = %config.session_file.display(), "starting");

    let store = Arc::new(FileStore::open(&config.session_file)?);
    let history = Arc::new(History::new(LOGIN_ROUTE));
    let state = AppState::new(config, store, history, Arc::new(ToastLog::new()))?;

    if !state.session.restore(Utc::now()) {
        tracing::info!("no live session; log in through the dashboard first");
        return Ok(());
    }

    let mut dashboard = Dashboard::new();
    dashboard.load(&state.api).await;
    for card in dashboard.cards() {
        tracing::info!(count = card.count, "{}", card.title);
    }
    for kind in [StockKind::In, StockKind::Out] {
        for row in dashboard.recent(kind) {
            tracing::info!(id = %row.id, "{}: {}", Dashboard::recent_title(kind), row.cells.join(" | "));
        }
    }

    Ok(())
}
