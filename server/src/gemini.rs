//! Gemini API連携
//!
//! generateContentを1回だけ呼び出し、レスポンス本文のテキストを返す。
//! リトライやフォールバックモデルは持たない

use ingredient_ai_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Gemini APIリクエスト
#[derive(Serialize)]
pub struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiRequest {
    /// プロンプト+インライン画像1枚のリクエストを作る
    ///
    /// JSONモード（responseMimeType: application/json）を要求する
    pub fn with_image(prompt: &str, mime_type: &str, base64_data: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: base64_data.to_string(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

/// generateContent呼び出し（1回のみ）
///
/// 最初のcandidateの最初のpartのテキストを返す
pub async fn generate_content(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    request: &GeminiRequest,
) -> Result<String> {
    let response = client
        .post(url)
        .query(&[("key", api_key)])
        .json(request)
        .send()
        .await
        .map_err(|e| Error::Provider(format!("request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Provider(format!("API error {}: {}", status, body)));
    }

    let payload: GeminiResponse = response
        .json()
        .await
        .map_err(|e| Error::Provider(format!("invalid response body: {}", e)))?;

    payload
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| Error::Provider("empty response".to_string()))
}
