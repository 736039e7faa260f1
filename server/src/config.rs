//! サーバ設定
//!
//! 起動時に環境変数から読み込む。APIキー以外は全てデフォルトあり

use std::env;

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_PORT: u16 = 3000;

/// サーバ設定
#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Gemini APIキー（未設定のままでも起動はできる）
    pub api_key: Option<String>,
    /// Gemini APIのベースURL（テストでモックに向けるため差し替え可能）
    pub api_url: String,
    pub model: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// - `PORT`: 待ち受けポート
    /// - `GEMINI_API_KEY`: APIキー（前後の空白は除去、空文字は未設定扱い）
    /// - `GEMINI_API_URL`: APIベースURL
    /// - `GEMINI_MODEL`: モデル名
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            port,
            api_key,
            api_url,
            model,
        }
    }

    /// generateContentエンドポイントのURL
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}
