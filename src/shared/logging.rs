//! Structured logging for routing and view loading
//!
//! Every event carries an `operation` field so navigation traces can be
//! filtered the same way on native and in the browser console.

/// Operation tags attached to router log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RouteResolution,
    Navigation,
    ViewLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RouteResolution => "route_resolution",
            LogOperation::Navigation => "navigation",
            LogOperation::ViewLoad => "view_load",
        }
    }
}

/// Log a successful match
pub fn log_route_matched(name: &str, path: &str) {
    tracing::debug!(
        operation = LogOperation::RouteResolution.as_str(),
        route = name,
        path = path,
        "Matched route"
    );
}

/// Log a path no route matched
pub fn log_no_match(path: &str) {
    tracing::warn!(
        operation = LogOperation::RouteResolution.as_str(),
        path = path,
        "No match found for location"
    );
}

/// Log a programmatic navigation
pub fn log_navigation(kind: &str, to: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        kind = kind,
        to = to,
        "Navigation"
    );
}

pub fn log_view_load_start(view: &str) {
    tracing::debug!(
        operation = LogOperation::ViewLoad.as_str(),
        view = view,
        "Loading view"
    );
}

pub fn log_view_load_success(view: &str, load_count: usize) {
    tracing::info!(
        operation = LogOperation::ViewLoad.as_str(),
        view = view,
        load_count = load_count,
        "View loaded"
    );
}

pub fn log_view_load_error(view: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ViewLoad.as_str(),
        view = view,
        error = error,
        "Failed to load view"
    );
}

/// Span wrapping a single navigation
#[macro_export]
macro_rules! nav_context {
    ($to:expr, $kind:expr) => {
        tracing::info_span!("navigation", to = %$to, kind = $kind)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::RouteResolution.as_str(), "route_resolution");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::ViewLoad.as_str(), "view_load");
    }
}
