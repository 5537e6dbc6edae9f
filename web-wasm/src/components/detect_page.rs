//! PPE検出ページ
//!
//! アップロード→検出→オーバーレイ表示のライフサイクルを持つ。
//! 状態遷移はUploadStateが担い、最後に発行したリクエストの応答
//! だけが表示を更新する（古い応答は破棄）

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo::console;
use gloo::dialogs;
use web_sys::Url;

use ppe_vision_common::UploadState;

use crate::api;
use crate::components::{
    detection_list::DetectionList, overlay_canvas::OverlayCanvas, upload_area::UploadArea,
};
use crate::config;

#[component]
pub fn DetectPage() -> impl IntoView {
    let state = RwSignal::new(UploadState::default());

    let on_file_selected = move |file: web_sys::File| {
        // ネットワーク往復を待たずにプレビューを出す
        let preview_url = match Url::create_object_url_with_blob(&file) {
            Ok(url) => url,
            Err(e) => {
                console::error!(format!("プレビューURLの生成に失敗: {:?}", e));
                return;
            }
        };

        let Some(token) = state.try_update(|s| s.begin(preview_url)) else {
            return;
        };

        spawn_local(async move {
            match api::detect_file(&file).await {
                Ok(result) => {
                    let applied = state.try_update(|s| s.complete(token, result));
                    if applied == Some(false) {
                        console::log!("古いリクエストの応答を破棄");
                    }
                }
                Err(err) => {
                    let message = err.to_string();
                    let applied = state.try_update(|s| s.fail(token, message.clone()));
                    if applied == Some(true) {
                        console::error!(format!("検出失敗: {}", message));
                        dialogs::alert(
                            "検出に失敗しました。バックエンドの稼働とファイル形式を確認してください。",
                        );
                    }
                }
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let preview_url = Signal::derive(move || state.with(|s| s.preview_url().map(str::to_string)));
    let detections = Signal::derive(move || state.with(|s| s.first_page_detections().to_vec()));
    let result_json = Signal::derive(move || {
        state.with(|s| {
            s.result()
                .and_then(|r| serde_json::to_string_pretty(r).ok())
        })
    });

    view! {
        <div class="page detect-page">
            <h2>"PPE検出"</h2>
            <p class="endpoint-note">"APIエンドポイント: " {config::detect_endpoint()}</p>

            <UploadArea on_file_selected=on_file_selected />

            <Show when=move || loading.get()>
                <p class="loading">"🔍 解析中..."</p>
            </Show>

            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="preview-grid">
                <div class="preview-panel">
                    <h3>"元画像"</h3>
                    {move || {
                        preview_url
                            .get()
                            .map(|url| view! { <img src=url alt="アップロード画像" /> })
                    }}
                </div>

                <div class="preview-panel">
                    <h3>"検出結果"</h3>
                    <Show when=move || preview_url.get().is_some()>
                        <OverlayCanvas preview_url=preview_url detections=detections />
                    </Show>
                </div>
            </div>

            <DetectionList detections=detections />

            <Show when=move || result_json.get().is_some()>
                <details class="result-json">
                    <summary>"詳細JSON"</summary>
                    <pre>{move || result_json.get().unwrap_or_default()}</pre>
                </details>
            </Show>
        </div>
    }
}
