//! 解析結果の型定義
//!
//! サーバとWeb(WASM)で共有される型:
//! - Ingredient: 成分1件の解析結果（ワイヤ形式そのまま）
//! - ErrorBody: エラーレスポンスの共通形式

use serde::{Deserialize, Serialize};

/// 成分1件の解析結果
///
/// モデルが返した配列の要素をそのまま保持する。
/// 表示用のid（配列インデックス）はここには持たせない
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    pub name: String,

    /// 機能の短い説明（2〜4語）
    pub purpose: String,

    /// 製品コンテキストに即したリスク・効能の要約
    pub analysis: String,

    /// 1文のトリビア（モデルが省略することがある）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
}

/// エラーレスポンス `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
