//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            "© 2026 PPE Vision — Leptos + WASM"
        </footer>
    }
}
