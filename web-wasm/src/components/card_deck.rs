//! 結果カードの横並び一覧

use ingredient_ai_common::Ingredient;
use leptos::prelude::*;

/// サマリーカード（name + purpose）の横スクロール列
///
/// idは受信時の配列インデックス。キーにもカード番号にも使う
#[component]
pub fn CardDeck<F>(ingredients: Signal<Vec<Ingredient>>, on_select: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send,
{
    view! {
        <div class="card-deck">
            <For
                each={move || ingredients.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(id, _)| *id
                children=move |(id, item): (usize, Ingredient)| {
                    let on_select = on_select.clone();
                    view! {
                        <div class="card" on:click=move |_| on_select(id)>
                            <h2>{item.name.clone()}</h2>
                            <p class="purpose">{item.purpose.clone()}</p>
                            <span class="card-number">{format!("{:02}", id + 1)}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
