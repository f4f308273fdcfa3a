use dioxus::prelude::*;

use crate::app::routes::Route;

#[component]
pub fn ChatPage(#[props(default)] initial_message: Option<String>) -> Element {
    tracing::debug!(
        "ChatPage rendering, initial message present: {}",
        initial_message.is_some()
    );

    rsx! {
        div { class: "chat-page",
            header { class: "page-header",
                Link {
                    to: Route::Input {},
                    class: "breadcrumb-link",
                    "← New question"
                }
            }
            div { class: "chat-page__messages",
                if let Some(message) = initial_message {
                    div { class: "c-message c-message--user", "{message}" }
                } else {
                    p { class: "chat-page__empty", "No message yet." }
                }
            }
        }
    }
}
