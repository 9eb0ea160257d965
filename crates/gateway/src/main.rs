use std::sync::Arc;

use milldesk_gateway::backend::StaticDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    milldesk_observability::init();

    let addr = std::env::var("MILLDESK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::warn!("using seeded in-memory directory; dev only");
    let app = milldesk_gateway::app::build_app(Arc::new(StaticDirectory::seeded_dev()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
