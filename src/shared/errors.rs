use thiserror::Error;

/// Failure raised by a lazy view factory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{view}: {reason}")]
pub struct ViewLoadError {
    pub view: String,
    pub reason: String,
}

impl ViewLoadError {
    pub fn new(view: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("No route matches path: {0}")]
    NoMatch(String),

    #[error("Unknown route name: {0}")]
    UnknownRouteName(String),

    #[error("View load failed: {0}")]
    ViewLoad(#[from] ViewLoadError),
}

pub type Result<T> = std::result::Result<T, RouterError>;
