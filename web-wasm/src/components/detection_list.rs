//! 検出一覧コンポーネント
//!
//! ライブ検出結果のラベル別件数と検出リストを表示する

use leptos::prelude::*;

use ppe_vision_common::{count_labels, Detection};

#[component]
pub fn DetectionList(detections: Signal<Vec<Detection>>) -> impl IntoView {
    let counts = Signal::derive(move || {
        let dets = detections.get();
        count_labels(dets.iter().map(|d| d.name.as_str()))
            .into_iter()
            .collect::<Vec<_>>()
    });

    view! {
        <Show when=move || !detections.get().is_empty()>
            <div class="detection-list">
                <h3>"検出一覧"</h3>

                <div class="label-counts">
                    <For
                        each=move || counts.get()
                        key=|(name, count)| (name.clone(), *count)
                        children=move |(name, count)| {
                            view! {
                                <div class="label-count">
                                    <span>{name}</span>
                                    <span class="count">{count}</span>
                                </div>
                            }
                        }
                    />
                </div>

                <ol class="detection-names">
                    {move || {
                        detections
                            .get()
                            .iter()
                            .map(|d| view! { <li>{d.name.clone()}</li> })
                            .collect_view()
                    }}
                </ol>
            </div>
        </Show>
    }
}
