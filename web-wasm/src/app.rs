//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{
    about_page::AboutPage, detect_page::DetectPage, footer::Footer, header::Header,
    history_page::HistoryPage, maintenance::UnderMaintenance, sidebar::Sidebar,
};

/// 表示中のビュー
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Detection,
    History,
    Settings,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::default());
    let (sidebar_open, set_sidebar_open) = signal(true);

    view! {
        <div class="app">
            <Header sidebar_open=sidebar_open set_sidebar_open=set_sidebar_open />

            <div class="app-body">
                <Sidebar sidebar_open=sidebar_open page=page set_page=set_page />

                <main class="main-content">
                    {move || match page.get() {
                        Page::Home => view! { <AboutPage /> }.into_any(),
                        Page::Detection => view! { <DetectPage /> }.into_any(),
                        Page::History => view! { <HistoryPage /> }.into_any(),
                        Page::Settings => view! { <UnderMaintenance /> }.into_any(),
                    }}
                </main>
            </div>

            <Footer />
        </div>
    }
}
