//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::api;
use crate::components::capture_button::CaptureButton;
use crate::components::card_deck::CardDeck;
use crate::components::detail_overlay::DetailOverlay;
use crate::state::{transition, Event, ViewState};

/// メインアプリケーションコンポーネント
///
/// 画面状態はViewStateひとつに集約し、遷移は全てstate::transitionを通す
#[component]
pub fn App() -> impl IntoView {
    let (view_state, set_view_state) = signal(ViewState::Idle);
    // 詳細オーバーレイの選択id（Results状態の上に重なる直交トグル）
    let (selected_id, set_selected_id) = signal(None::<usize>);

    let dispatch = move |event: Event| {
        set_view_state.update(|state| *state = transition(state.clone(), event));
    };

    // 画像選択→解析リクエスト（同時リクエストは状態機械が1件に制限）
    let on_capture = move |file: web_sys::File| {
        dispatch(Event::CaptureStarted);
        leptos::task::spawn_local(async move {
            match api::analyze_image(&file).await {
                Ok(items) => dispatch(Event::AnalysisSucceeded(items)),
                Err(message) => {
                    gloo::console::error!(message.clone());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                    dispatch(Event::AnalysisFailed(message));
                }
            }
        });
    };

    let on_reset = move |_| {
        set_selected_id.set(None);
        dispatch(Event::Reset);
    };

    // 表示用idは受信時の配列インデックスから描画時に導出する
    let ingredients = Signal::derive(move || match view_state.get() {
        ViewState::Results(items) => items,
        _ => Vec::new(),
    });

    let selected = Signal::derive(move || {
        selected_id
            .get()
            .and_then(|id| ingredients.get().get(id).cloned().map(|item| (id, item)))
    });

    view! {
        <main class="app">
            <Show when=move || view_state.get() == ViewState::Idle>
                <section class="prompt">
                    <h1>"Take a photo of ingredients to get a breakdown."</h1>
                    <CaptureButton on_capture=on_capture />
                </section>
            </Show>

            <Show when=move || view_state.get() == ViewState::Analyzing>
                <section class="analyzing">
                    <div class="spinner"></div>
                    <p>"Analyzing..."</p>
                </section>
            </Show>

            <Show when=move || matches!(view_state.get(), ViewState::Results(_))>
                <button class="scan-new" on:click=on_reset>
                    "← Scan New"
                </button>
                <CardDeck
                    ingredients=ingredients
                    on_select=move |id| set_selected_id.set(Some(id))
                />
            </Show>

            {move || {
                selected.get().map(|(id, item)| view! {
                    <DetailOverlay
                        id=id
                        ingredient=item
                        on_close=move || set_selected_id.set(None)
                    />
                })
            }}
        </main>
    }
}
