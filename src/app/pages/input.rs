//! Landing page: collects the first message and opens the chat

use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::nav_context;
use crate::shared::logging::log_navigation;

#[component]
pub fn InputPage() -> Element {
    let mut input = use_signal(String::new);

    let mut submit = move || {
        let message = input.read().trim().to_string();
        if message.is_empty() {
            return;
        }
        let route = Route::chat(message);
        let _span = nav_context!(route, "push").entered();
        log_navigation("push", &route.href());
        navigator().push(route);
        input.set(String::new());
    };

    rsx! {
        div { class: "input-page",
            h1 { class: "page-title", "AI Chat" }
            form {
                class: "input-page__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit();
                },
                input {
                    class: "input-page__field",
                    r#type: "text",
                    placeholder: "Ask something...",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                button { class: "c-button", r#type: "submit", "Send" }
            }
        }
    }
}
