//! 検出履歴テーブルコンポーネント

use leptos::prelude::*;

use gloo::console;
use ppe_vision_common::{count_description, AlertStatus, DetectionRecord, HistoryState};

use crate::config;

#[component]
pub fn HistoryTable<F>(state: RwSignal<HistoryState>, on_acknowledge: F) -> impl IntoView
where
    F: Fn(i64) + 'static + Copy + Send,
{
    view! {
        <div class="table-wrap">
            <table class="history-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"ファイル"</th>
                        <th>"画像"</th>
                        <th>"アラート"</th>
                        <th>"Acknowledge"</th>
                        <th>"検出内容"</th>
                        <th>"ラベル集計"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || state.with(|s| s.records().is_empty())>
                        <tr>
                            <td colspan="7" class="placeholder">"No records found."</td>
                        </tr>
                    </Show>

                    <For
                        each=move || state.with(|s| s.records().to_vec())
                        key=|record| record.id
                        children=move |record| {
                            view! { <HistoryRow state=state record=record on_acknowledge=on_acknowledge /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn HistoryRow<F>(
    state: RwSignal<HistoryState>,
    record: DetectionRecord,
    on_acknowledge: F,
) -> impl IntoView
where
    F: Fn(i64) + 'static + Copy + Send,
{
    let id = record.id;

    // アラート/acknowledgeセルだけが操作で変わるため、idで引き直す
    let alert_status = Signal::derive(move || state.with(|s| s.alert_status(id)));
    let acknowledged = Signal::derive(move || state.with(|s| s.is_acknowledged(id)));
    let clickable = Signal::derive(move || {
        state.with(|s| s.alert_status(id).needs_attention() && !s.is_ack_pending(id))
    });

    // descriptionは読み取り専用。壊れていればログを残して「検出なし」扱い
    let label_counts: Vec<(String, usize)> = match record.description.as_deref() {
        None => Vec::new(),
        Some(raw) => match count_description(raw) {
            Ok(counts) => counts.into_iter().collect(),
            Err(err) => {
                console::error!(format!("descriptionのパース失敗 (id={}): {}", id, err));
                Vec::new()
            }
        },
    };

    let thumbnail = if record.image_path.is_empty() {
        view! { <span class="text-muted">"No image"</span> }.into_any()
    } else {
        let src = config::image_url(&record.image_path);
        view! { <img class="thumbnail" src=src alt=record.filename.clone() /> }.into_any()
    };

    view! {
        <tr>
            <td>{record.id}</td>
            <td>{record.filename.clone()}</td>
            <td>{thumbnail}</td>

            <td
                class="alert-cell"
                class:blink=move || alert_status.get().needs_attention()
                style:cursor=move || if clickable.get() { "pointer" } else { "default" }
                on:click=move |_| on_acknowledge(id)
            >
                {move || match alert_status.get() {
                    AlertStatus::NoAlert => view! { <span class="icon ok">"✔"</span> },
                    AlertStatus::AlertUnacknowledged => view! { <span class="icon warn">"⚠"</span> },
                    AlertStatus::AlertAcknowledged => view! { <span class="icon seen">"⚠"</span> },
                }}
            </td>

            <td>
                {move || if acknowledged.get() {
                    view! { <span class="icon ok">"✔"</span> }
                } else {
                    view! { <span class="icon none">"✗"</span> }
                }}
            </td>

            <td class="detections-cell">
                {if record.results.is_empty() {
                    view! { <span class="text-muted">"No detections"</span> }.into_any()
                } else {
                    record
                        .results
                        .iter()
                        .enumerate()
                        .map(|(idx, page)| {
                            let page_no = page.page.unwrap_or(idx as u32 + 1);
                            let items = if page.detections.is_empty() {
                                view! { <li>"No detections"</li> }.into_any()
                            } else {
                                page.detections
                                    .iter()
                                    .map(|det| view! { <li>{det.confidence_label()}</li> })
                                    .collect_view()
                                    .into_any()
                            };
                            view! {
                                <div class="page-result">
                                    <strong>{format!("Page {}:", page_no)}</strong>
                                    <ul>{items}</ul>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </td>

            <td class="summary-cell">
                {if label_counts.is_empty() {
                    view! { <span class="text-muted">"No detections"</span> }.into_any()
                } else {
                    label_counts
                        .into_iter()
                        .map(|(name, count)| {
                            view! {
                                <div class="label-count">
                                    <span>{name}</span>
                                    <span class="count">{count}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </td>
        </tr>
    }
}
