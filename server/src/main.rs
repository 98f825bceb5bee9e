//! Campaign wiki server: reads settings from the environment (and `.env`),
//! prepares the database, then serves the API until Ctrl-C.

use campaign_wiki::{app, apply_migrations, connect, ensure_database_exists, AppState, PgWikiStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campaign_wiki=info,campaign_wiki_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(&settings).await?;
    if settings.migrate {
        apply_migrations(&pool).await?;
    }

    let state = AppState::new(Arc::new(PgWikiStore::new(pool.clone())));
    let router = app(state, &settings);

    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!("Server started on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed, bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown requested");
}
