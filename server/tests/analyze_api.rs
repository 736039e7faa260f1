//! /api/analyze のE2Eテスト
//!
//! Gemini APIはwiremockでスタブする

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ingredient_ai_server::{build_app, AppConfig, AppState};

const GENERATE_CONTENT_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn test_app(api_key: Option<&str>, api_url: &str) -> Router {
    let config = AppConfig {
        api_key: api_key.map(|key| key.to_string()),
        api_url: api_url.to_string(),
        ..AppConfig::default()
    };
    build_app(Arc::new(AppState::new(config)))
}

/// multipart/form-dataリクエストを手組みする
fn multipart_request(field_name: &str, content_type: Option<&str>, data: &[u8]) -> Request<Body> {
    let boundary = "test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"label.jpg\"\r\n",
            field_name
        )
        .as_bytes(),
    );
    if let Some(ct) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", ct).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Gemini generateContentの正常レスポンス形式
fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }]
            }
        }]
    })
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn missing_image_field_returns_400_without_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request("note", None, b"not an image"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "No image provided");
}

#[tokio::test]
async fn missing_api_key_returns_500_without_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let app = test_app(None, &provider.uri());
    let response = app
        .oneshot(multipart_request(
            "image",
            Some("image/jpeg"),
            b"fake jpeg bytes",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Server missing API Key");
}

#[tokio::test]
async fn well_formed_provider_array_is_returned_verbatim() {
    let ingredients = json!([
        {
            "name": "Water",
            "purpose": "Solvent",
            "analysis": "Inert, safe.",
            "history": "Most common cosmetic ingredient."
        },
        {
            "name": "Fragrance",
            "purpose": "Scent",
            "analysis": "Common allergen in sensitive users."
        }
    ]);

    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body(&ingredients.to_string())),
        )
        .expect(1)
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request(
            "image",
            Some("image/png"),
            b"fake png bytes",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    // 配列・順序・フィールドをそのまま返す
    assert_eq!(body, ingredients);
}

#[tokio::test]
async fn empty_provider_array_returns_empty_200() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("[]")))
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request("image", None, b"fake jpeg bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn undeclared_content_type_is_forwarded_as_jpeg() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .and(body_string_contains(r#""mime_type":"image/jpeg""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("[]")))
        .expect(1)
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    // Content-Typeヘッダなしのimageフィールド
    let response = app
        .oneshot(multipart_request("image", None, b"fake jpeg bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn declared_content_type_is_forwarded_unmodified() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .and(body_string_contains(r#""mime_type":"image/webp""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("[]")))
        .expect(1)
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request("image", Some("image/webp"), b"RIFF"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn oversized_image_returns_400_without_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    // 上限10MBの1バイト超過
    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];
    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request("image", Some("image/jpeg"), &oversized))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Image too large"));
}

#[tokio::test]
async fn unparsable_provider_text_returns_500() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_body("Sorry, I can't read this image.")),
        )
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request("image", Some("image/jpeg"), b"blurry"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Analysis failed. Try a clear photo.");
}

#[tokio::test]
async fn provider_http_error_returns_500() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&provider)
        .await;

    let app = test_app(Some("test-key"), &provider.uri());
    let response = app
        .oneshot(multipart_request("image", Some("image/jpeg"), b"bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Analysis failed. Try a clear photo.");
}

#[tokio::test]
async fn non_matching_route_returns_404() {
    let app = test_app(Some("test-key"), "http://127.0.0.1:1");
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
