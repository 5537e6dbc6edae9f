//! アップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::{DragEvent, FileList};

/// 画像1枚のアップロード受け口
///
/// クリックでファイル選択、ドラッグ&ドロップも受け付ける。
/// 選択のたびにon_file_selectedへ1ファイルを渡す
#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_files = {
        let on_file_selected = on_file_selected.clone();
        move |files: FileList| {
            if let Some(file) = files.get(0) {
                on_file_selected(file);
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = {
        let handle_files = handle_files.clone();
        move |_| {
            if let Some(input) = input_ref.get_untracked() {
                if let Some(files) = input.files() {
                    handle_files(files);
                }
                // 同じファイルの再選択でもchangeが発火するように戻す
                input.set_value("");
            }
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                accept="image/*,.pdf"
                style="display: none"
                node_ref=input_ref
                on:change=on_change
                // クリックがエリアに戻って再帰しないように止める
                on:click=|ev| ev.stop_propagation()
            />
            <div class="upload-icon">"📷"</div>
            <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"対応形式: JPEG, PNG, PDF"</p>
        </div>
    }
}
