//! 概要ページ

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h2>"PPE Vision"</h2>
            <p>
                "アップロードした画像から保護具（ヘルメット・ベスト・安全靴）を検出し、"
                "検出結果のオーバーレイ表示と履歴のacknowledge管理を行うツールです。"
            </p>
            <p class="text-muted">
                "左のメニューからPPE検出または検出履歴を開いてください。"
            </p>
        </div>
    }
}
