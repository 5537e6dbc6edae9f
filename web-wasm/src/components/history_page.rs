//! 検出履歴ページ
//!
//! マウント時に履歴を一度だけ取得し、acknowledge操作を
//! HistoryStateの状態機械経由でリモートへ反映する

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo::console;
use gloo::dialogs;

use ppe_vision_common::HistoryState;

use crate::api;
use crate::components::history_table::HistoryTable;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let state = RwSignal::new(HistoryState::default());

    // 一度きりの全件取得。失敗時は空一覧+ログのみで、自動リトライはしない
    state.update(|s| s.start_loading());
    spawn_local(async move {
        match api::fetch_records().await {
            Ok(records) => {
                state.try_update(|s| s.finish_loading(records));
            }
            Err(err) => {
                console::error!(format!("履歴の取得に失敗: {}", err));
                state.try_update(|s| s.load_failed());
            }
        }
    });

    let on_acknowledge = move |id: i64| {
        // ゲートを通った操作だけがリモート変異を発行する
        let begun = state.try_update(|s| s.begin_acknowledge(id)).unwrap_or(false);
        if !begun {
            return;
        }

        spawn_local(async move {
            match api::acknowledge_record(id).await {
                Ok(()) => {
                    state.try_update(|s| s.acknowledge_succeeded(id));
                }
                Err(err) => {
                    state.try_update(|s| s.acknowledge_failed(id));
                    console::error!(format!("acknowledgeに失敗 (id={}): {}", id, err));
                    dialogs::alert("レコードのacknowledgeに失敗しました");
                }
            }
        });
    };

    view! {
        <div class="page history-page">
            <h2>"検出履歴"</h2>

            <Show
                when=move || state.with(|s| s.is_loading())
                fallback=move || view! { <HistoryTable state=state on_acknowledge=on_acknowledge /> }
            >
                <p class="loading">"読み込み中..."</p>
            </Show>
        </div>
    }
}
