use std::sync::Arc;

use course_page::api::router;
use course_page::catalog::CatalogHttpClient;
use course_page::config::AppConfig;
use course_page::form::{LeadHttpSubmitter, PendingSubmissions};
use course_page::state::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_page=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    info!("course catalog at {}", config.catalog_base_url);

    let state = AppState {
        catalog: Arc::new(CatalogHttpClient::new(config.catalog_base_url.clone())?),
        submitter: Arc::new(LeadHttpSubmitter::new()?),
        submission: config.submission.clone(),
        reveal_threshold: config.reveal_threshold,
        pending: PendingSubmissions::new(),
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
