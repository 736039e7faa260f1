//! 解析エンドポイント呼び出し
//!
//! 画像をFormDataで `/api/analyze` にPOSTし、成分リストを受け取る

use ingredient_ai_common::Ingredient;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

const ANALYZE_URL: &str = "/api/analyze";

/// 画像を解析エンドポイントへ送信
///
/// エラー時はユーザ向けメッセージを返す（アラート表示用）
pub async fn analyze_image(file: &File) -> Result<Vec<Ingredient>, String> {
    let form = FormData::new().map_err(|_| "Failed to build request".to_string())?;
    form.append_with_blob("image", file)
        .map_err(|_| "Failed to build request".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts)
        .map_err(|_| "Failed to build request".to_string())?;

    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Network error. Check your connection.".to_string())?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Unexpected response".to_string())?;

    let ok = resp.ok();

    let json_promise = resp
        .json()
        .map_err(|_| "Unexpected response".to_string())?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|_| "Unexpected response".to_string())?;
    let value: Value = serde_wasm_bindgen::from_value(json)
        .map_err(|_| "Unexpected response".to_string())?;

    parse_response(ok, value)
}

/// レスポンス本文を結果/エラーメッセージに振り分ける
///
/// errorフィールドの有無だけを見る。レコード形状の検証はしない
/// （欠けたフィールドは空欄のまま表示される）
fn parse_response(ok: bool, value: Value) -> Result<Vec<Ingredient>, String> {
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(message.to_string());
    }

    if !ok {
        return Err("Analysis failed. Try a clear photo.".to_string());
    }

    serde_json::from_value(value).map_err(|_| "Unexpected response".to_string())
}
