//! プロンプト定義
//!
//! 成分表ラベル解析用の固定プロンプト。
//! ユーザ入力で変化しない契約の一部なので定数として持つ

/// 成分表解析プロンプト
///
/// モデルへの指示:
/// 1. 写真から製品カテゴリを推定
/// 2. 読み取れる成分を全て抽出
/// 3. name / purpose / analysis / history の4フィールドを持つ
///    JSON配列のみを出力（説明文は不要）
pub const ANALYSIS_PROMPT: &str = r#"Analyze this image of a product ingredient list.
1. Identify the product context (e.g., shampoo, snack, cleaner).
2. Extract ingredients and return a JSON array where each object has:
   - "name": Common name.
   - "purpose": 2-4 word function.
   - "analysis": Concise benefit/risk summary relevant to the product context.
   - "history": Optional 1 sentence interesting fact.
RETURN ONLY THE JSON ARRAY."#;
