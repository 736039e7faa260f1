//! Ingredient AI 解析サーバ

use std::sync::Arc;

use ingredient_ai_server::{build_app, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        // 起動は許可する（リクエスト時に設定エラーとして報告される）
        tracing::warn!("GEMINI_API_KEY is not set; /api/analyze will fail until it is provided");
    }

    let port = config.port;
    let app = build_app(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
