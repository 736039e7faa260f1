//! 画面状態の遷移
//!
//! 状態は排他的な3種類のみ。遷移は (state, event) -> state の純粋関数で、
//! コンポーネントの外で単体テストできる

use ingredient_ai_common::Ingredient;

/// 画面状態
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    /// 結果なし・解析中でもない（撮影ボタンを表示）
    #[default]
    Idle,
    /// リクエスト送信中（ビジー表示、撮影ボタンは出さない）
    Analyzing,
    /// 解析結果あり（空配列も正常な結果）
    Results(Vec<Ingredient>),
}

/// 状態遷移イベント
#[derive(Clone, Debug)]
pub enum Event {
    /// 画像が選択され、リクエストを送信した
    CaptureStarted,
    /// エンドポイントが成分リストを返した
    AnalysisSucceeded(Vec<Ingredient>),
    /// 失敗（呼び出し側でアラート表示する。メッセージはここでは使わない）
    AnalysisFailed(String),
    /// 「Scan New」で最初からやり直す
    Reset,
}

/// 状態遷移
///
/// 定義外の組み合わせは現状維持
pub fn transition(state: ViewState, event: Event) -> ViewState {
    match (state, event) {
        (ViewState::Idle, Event::CaptureStarted) => ViewState::Analyzing,
        (ViewState::Analyzing, Event::AnalysisSucceeded(items)) => ViewState::Results(items),
        (ViewState::Analyzing, Event::AnalysisFailed(_)) => ViewState::Idle,
        (_, Event::Reset) => ViewState::Idle,
        (state, _) => state,
    }
}
