//! App shell: mounts the router and renders lazily loaded pages

use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingText};
use crate::app::pages::{ChatPage, InputPage};
use crate::app::routes::{PageProps, Route};
use crate::app::views::{Page, PageViews};

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("AI Chat app initialized");
    });

    use_context_provider(PageViews::default);

    rsx! {
        Router::<Route> {}
    }
}

/// Loads the page's view on first activation, then renders it with its props
#[component]
pub fn LazyPage(page: Page, page_props: PageProps) -> Element {
    let views = use_context::<PageViews>();

    let mut loaded = use_resource(move || {
        let views = views.clone();
        async move { views.load(page).await }
    });

    let state = loaded.read().clone();

    match state {
        None => rsx! {
            LoadingText { message: "Loading page..." }
        },
        Some(Ok(Page::Input)) => rsx! {
            InputPage {}
        },
        Some(Ok(Page::Chat)) => rsx! {
            ChatPage { initial_message: page_props.initial_message }
        },
        // Failed loads are not cached, so a restart goes back to the factory
        Some(Err(e)) => rsx! {
            ErrorMessage { message: e.to_string() }
            button {
                class: "c-button",
                onclick: move |_| loaded.restart(),
                "Retry"
            }
        },
    }
}
