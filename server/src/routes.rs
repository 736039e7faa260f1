//! ルーティングとanalyzeハンドラ

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ingredient_ai_common::{parse_ingredients, ErrorBody, Ingredient, ANALYSIS_PROMPT};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::gemini::{self, GeminiRequest};

/// 画像サイズ上限
const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// MIMEタイプ未申告時のデフォルト
const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// 全リクエストで共有する状態
///
/// サーバはステートレス。設定とreqwestクライアント（接続再利用）のみ
pub struct AppState {
    pub config: AppConfig,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// ルーター構築
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 成分表画像の解析
///
/// チェック順序:
/// 1. APIキー（アップロードを読む前）
/// 2. imageフィールドの有無
/// 3. Gemini呼び出し+パース（失敗はまとめて500）
async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let api_key = state
        .config
        .api_key
        .clone()
        .ok_or(ApiError::MissingApiKey)?;

    let image = read_image_field(multipart).await?;
    tracing::info!(
        bytes = image.data.len(),
        mime_type = %image.mime_type,
        "image received"
    );

    let request =
        GeminiRequest::with_image(ANALYSIS_PROMPT, &image.mime_type, &BASE64.encode(&image.data));

    let response_text = gemini::generate_content(
        &state.client,
        &state.config.generate_content_url(),
        &api_key,
        &request,
    )
    .await
    .map_err(ApiError::Analysis)?;

    let ingredients = parse_ingredients(&response_text).map_err(ApiError::Analysis)?;
    tracing::info!(count = ingredients.len(), "analysis complete");

    Ok(Json(ingredients))
}

struct ImageField {
    data: Vec<u8>,
    mime_type: String,
}

/// マルチパートからimageフィールドを読み出す
///
/// フィールドがなければNoImage、宣言MIMEタイプがなければimage/jpeg扱い
async fn read_image_field(mut multipart: Multipart) -> Result<ImageField, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        return Ok(ImageField {
            data: data.to_vec(),
            mime_type,
        });
    }

    Err(ApiError::NoImage)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}
