//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="header">
            <button
                class="sidebar-toggle"
                on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
            >
                {move || if sidebar_open.get() { "✕" } else { "☰" }}
            </button>
            <h1>"PPE Vision - 個人防護具検出"</h1>
        </header>
    }
}
