//! メンテナンス中プレースホルダ

use leptos::prelude::*;

#[component]
pub fn UnderMaintenance() -> impl IntoView {
    view! {
        <div class="page maintenance-page">
            <div class="maintenance-icon">"🚧"</div>
            <h2>"Under Maintenance"</h2>
            <p class="text-muted">
                "このページは現在メンテナンス中です。しばらくしてから再度お試しください。"
            </p>
        </div>
    }
}
