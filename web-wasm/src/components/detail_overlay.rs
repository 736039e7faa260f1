//! 詳細オーバーレイコンポーネント

use ingredient_ai_common::Ingredient;
use leptos::prelude::*;

/// 全画面の詳細表示（name / purpose / analysis / 任意のhistory）
///
/// 開閉はResults状態の上の一時的なトグルで、レコードリストには触らない
#[component]
pub fn DetailOverlay<F>(id: usize, ingredient: Ingredient, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let close_backdrop = {
        let on_close = on_close.clone();
        move |_| on_close()
    };
    let close_button = move |_| on_close();

    view! {
        <div class="overlay-backdrop" on:click=close_backdrop></div>
        <div class="overlay">
            <button class="overlay-close" on:click=close_button>
                "×"
            </button>
            <span class="card-number">{format!("{:02}", id + 1)}</span>
            <h2>{ingredient.name.clone()}</h2>
            <section>
                <h3>"Function"</h3>
                <p>{ingredient.purpose.clone()}</p>
            </section>
            <section>
                <h3>"Analysis"</h3>
                <p>{ingredient.analysis.clone()}</p>
            </section>
            {ingredient.history.clone().map(|history| view! {
                <section>
                    <h3>"Origin"</h3>
                    <p class="history">{history}</p>
                </section>
            })}
        </div>
    }
}
