use dioxus::prelude::*;

use crate::app::routes::Route;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Shown when no route matches the address bar
#[component]
pub fn NotFoundMessage(path: String) -> Element {
    rsx! {
        div { class: "c-not-found",
            h1 { class: "c-not-found__title", "Page not found" }
            p { class: "c-not-found__path", "{path}" }
            Link {
                to: Route::Input {},
                class: "c-button",
                "Back to start"
            }
        }
    }
}
