//! Lazily loaded pages and route activation

use std::rc::Rc;

use serde::Serialize;

use crate::app::routes::{PageProps, Route};
use crate::lazy::LazyView;
use crate::shared::errors::{Result, RouterError, ViewLoadError};

/// Renderable units a route can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    Input,
    Chat,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Input => "InputPage",
            Page::Chat => "ChatPage",
        }
    }
}

async fn load_input_page() -> std::result::Result<Page, ViewLoadError> {
    Ok(Page::Input)
}

async fn load_chat_page() -> std::result::Result<Page, ViewLoadError> {
    Ok(Page::Chat)
}

/// A matched route with its loaded view and props
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activation {
    pub name: &'static str,
    pub path: String,
    pub view: Page,
    pub props: PageProps,
}

/// One lazy view per page, shared through Dioxus context
#[derive(Clone)]
pub struct PageViews {
    input: Rc<LazyView<Page>>,
    chat: Rc<LazyView<Page>>,
}

impl Default for PageViews {
    fn default() -> Self {
        Self {
            input: Rc::new(LazyView::new(Page::Input.as_str(), load_input_page)),
            chat: Rc::new(LazyView::new(Page::Chat.as_str(), load_chat_page)),
        }
    }
}

impl PageViews {
    pub fn view(&self, page: Page) -> &LazyView<Page> {
        match page {
            Page::Input => &self.input,
            Page::Chat => &self.chat,
        }
    }

    pub async fn load(&self, page: Page) -> std::result::Result<Page, ViewLoadError> {
        self.view(page).load().await
    }

    /// Load the route's view and derive its props
    pub async fn activate(&self, route: &Route) -> Result<Activation> {
        let page = route
            .page()
            .ok_or_else(|| RouterError::NoMatch(route.href()))?;
        let view = self.load(page).await?;
        Ok(Activation {
            name: route.name(),
            path: route.href(),
            view,
            props: route.props(),
        })
    }
}
