//! APIエラー型
//!
//! 全ての失敗を `{ "error": "..." }` + HTTPステータスに変換する。
//! 内部の詳細はログにのみ出し、クライアントには短いメッセージだけを返す

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ingredient_ai_common::{Error, ErrorBody};

/// エンドポイントが返すエラー
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// APIキー未設定（アップロードを読む前に検出する）
    #[error("Server missing API Key")]
    MissingApiKey,

    /// imageフィールドなし
    #[error("No image provided")]
    NoImage,

    /// マルチパートの読み取り失敗・サイズ超過など
    #[error("{0}")]
    BadRequest(String),

    /// プロバイダ呼び出し・レスポンスパースの失敗
    #[error("Analysis failed. Try a clear photo.")]
    Analysis(#[source] Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NoImage | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Analysis(source) = &self {
            tracing::error!(error = %source, "gemini analysis failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
