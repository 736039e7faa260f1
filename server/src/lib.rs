//! Ingredient AI 解析エンドポイント
//!
//! `POST /api/analyze` で成分表の画像を受け取り、
//! Gemini APIに1回だけ問い合わせて結果のJSON配列を返す

pub mod config;
pub mod error;
pub mod gemini;
pub mod routes;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::{build_app, AppState};
