//! モデル出力パーサー
//!
//! Gemini APIのレスポンステキストからJSON配列を抽出し、
//! Ingredientのリストにパースする

use crate::error::{Error, Result};
use crate::types::Ingredient;

/// レスポンステキストからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の [...] 配列
/// 3. エラー
///
/// # Examples
/// ```
/// use ingredient_ai_common::extract_json;
///
/// let response = "[{\"name\": \"Water\"}]";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("Water"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の [...] を探す
    if let Some(start) = response.find('[') {
        if let Some(end) = response.rfind(']') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSON array not found".into()))
}

/// 解析レスポンスをパース
///
/// モデルが返した順序をそのまま保持する。
/// フィールドの存在チェックはデシリアライズ以上のことはしない
pub fn parse_ingredients(response: &str) -> Result<Vec<Ingredient>> {
    let json_str = extract_json(response)?;
    let ingredients: Vec<Ingredient> = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("JSON parse error: {}", e)))?;
    Ok(ingredients)
}
