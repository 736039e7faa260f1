//! 撮影ボタンコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

/// 撮影/ファイル選択ボタン
///
/// クリックでfile inputを生成して開く（capture=environmentでカメラ優先）。
/// 選択された1枚をon_captureに渡す
#[component]
pub fn CaptureButton<F>(on_capture: F) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone + Send,
{
    let on_click = move |_| {
        // ファイル選択ダイアログを開く
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("file");
        input.set_accept("image/*");
        let _ = input.set_attribute("capture", "environment");

        let on_capture = on_capture.clone();
        let input_ref = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(file) = input_ref.files().and_then(|files| files.get(0)) {
                on_capture(file);
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    view! {
        <button class="capture-button" on:click=on_click>
            "📷 Scan Now"
        </button>
    }
}
