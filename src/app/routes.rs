//! The application's route table: Input at `/`, Chat at `/chat`

use std::fmt;

use dioxus::prelude::*;
use serde::Serialize;

use crate::app::components::NotFoundMessage;
use crate::app::shell::LazyPage;
use crate::app::views::Page;
use crate::shared::errors::{Result, RouterError};
use crate::shared::logging::{log_no_match, log_route_matched};

pub const INPUT_ROUTE: &str = "Input";
pub const CHAT_ROUTE: &str = "Chat";
pub const NOT_FOUND_ROUTE: &str = "NotFound";

/// Query parameter carrying the first chat message
pub const MESSAGE_QUERY: &str = "message";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page - collects the first message
    #[route("/")]
    Input {},

    // Conversation, optionally seeded by ?message=
    #[route("/chat?:..query")]
    Chat { query: ChatQuery },

    // Anything else
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Query string of the Chat route
///
/// `message` keeps the raw value: `?message=` is `Some("")`, a missing key or
/// `?message` without `=` is `None`. Repeated keys take the first value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatQuery {
    pub message: Option<String>,
}

impl From<&str> for ChatQuery {
    fn from(query: &str) -> Self {
        let message = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| decode_component(key) == MESSAGE_QUERY)
            .map(|(_, value)| decode_component(value));
        Self { message }
    }
}

impl fmt::Display for ChatQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}={}", MESSAGE_QUERY, urlencoding::encode(message)),
            None => Ok(()),
        }
    }
}

/// `+` is a space, then percent-decoding; invalid UTF-8 is kept as typed
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

/// Inputs handed to the activated page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_message: Option<String>,
}

impl Route {
    pub fn chat(message: impl Into<String>) -> Self {
        Route::Chat {
            query: ChatQuery {
                message: Some(message.into()),
            },
        }
    }

    /// Route for programmatic navigation by name
    pub fn named(name: &str) -> Result<Self> {
        match name {
            INPUT_ROUTE => Ok(Route::Input {}),
            CHAT_ROUTE => Ok(Route::Chat {
                query: ChatQuery::default(),
            }),
            _ => Err(RouterError::UnknownRouteName(name.to_string())),
        }
    }

    /// Match a URL; anything that lands on the catch-all is `NoMatch`
    pub fn resolve(url: &str) -> Result<Self> {
        match url.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => {
                log_no_match(url);
                Err(RouterError::NoMatch(url.to_string()))
            }
            Ok(route) => {
                log_route_matched(route.name(), url);
                Ok(route)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Input {} => INPUT_ROUTE,
            Route::Chat { .. } => CHAT_ROUTE,
            Route::NotFound { .. } => NOT_FOUND_ROUTE,
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Input {} => Some(Page::Input),
            Route::Chat { .. } => Some(Page::Chat),
            Route::NotFound { .. } => None,
        }
    }

    pub fn has_props(&self) -> bool {
        matches!(self, Route::Chat { .. })
    }

    /// `initialMessage` is the raw `message` query value; absent stays absent
    pub fn props(&self) -> PageProps {
        match self {
            Route::Chat { query } => PageProps {
                initial_message: query.message.clone(),
            },
            _ => PageProps::default(),
        }
    }

    /// URL of this route; an empty query leaves no trailing `?`
    pub fn href(&self) -> String {
        let mut url = self.to_string();
        if url.ends_with('?') {
            url.pop();
        }
        url
    }
}

#[component]
fn Input() -> Element {
    rsx! {
        LazyPage { page: Page::Input, page_props: PageProps::default() }
    }
}

#[component]
fn Chat(query: ChatQuery) -> Element {
    let page_props = Route::Chat { query }.props();

    rsx! {
        LazyPage { page: Page::Chat, page_props }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log_no_match(&path);

    rsx! {
        NotFoundMessage { path }
    }
}
