//! サイドバーコンポーネント

use leptos::prelude::*;

use crate::app::Page;

fn item_class(active: bool) -> &'static str {
    if active {
        "nav-item active"
    } else {
        "nav-item"
    }
}

#[component]
pub fn Sidebar(
    sidebar_open: ReadSignal<bool>,
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
) -> impl IntoView {
    view! {
        <aside class=move || {
            if sidebar_open.get() { "sidebar" } else { "sidebar collapsed" }
        }>
            <nav>
                <button
                    class=move || item_class(page.get() == Page::Home)
                    on:click=move |_| set_page.set(Page::Home)
                >
                    "ホーム"
                </button>
                <button
                    class=move || item_class(page.get() == Page::Detection)
                    on:click=move |_| set_page.set(Page::Detection)
                >
                    "PPE検出"
                </button>
                <button
                    class=move || item_class(page.get() == Page::History)
                    on:click=move |_| set_page.set(Page::History)
                >
                    "検出履歴"
                </button>
                <button
                    class=move || item_class(page.get() == Page::Settings)
                    on:click=move |_| set_page.set(Page::Settings)
                >
                    "設定"
                </button>
            </nav>
        </aside>
    }
}
