//! Navigation seam
//!
//! The authentication protocol redirects to the login page when the
//! session dies. Redirecting is a UI-shell concern, so it sits behind a
//! trait: embedders without a navigable surface get [`NoopNavigator`]
//! and the redirect is skipped instead of failing.

/// Path of the login page
pub const LOGIN_PAGE: &str = "/login";

/// Navigable surface of the hosting shell
pub trait Navigator: Send + Sync {
    /// Current location, `None` when there is no navigable surface
    fn current_location(&self) -> Option<String>;

    /// Navigate to `path`
    fn goto(&self, path: &str);
}

/// No navigable surface: location unknown, navigation dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_location(&self) -> Option<String> {
        None
    }

    fn goto(&self, path: &str) {
        tracing::warn!(path, "No navigator attached, redirect dropped");
    }
}
