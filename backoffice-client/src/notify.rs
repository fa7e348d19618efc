//! Notification bridge
//!
//! The HTTP layer surfaces business and authentication failures as
//! transient on-screen notices, but it runs outside any UI tree. The
//! `Notifier` trait is the seam: a UI shell injects its own
//! implementation at client construction, headless embedders get
//! [`NoopNotifier`] and every call is a safe no-op.

use std::time::Duration;

/// Default visible duration for success/info/warning notices
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4500);

/// Default visible duration for error notices
pub const ERROR_DURATION: Duration = Duration::from_millis(6000);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Screen anchor for a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// One transient, non-blocking, dismissible notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub description: Option<String>,
    pub duration: Duration,
    pub placement: Placement,
}

impl Notice {
    /// Build a notice with the default duration for its kind
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        let duration = match kind {
            NoticeKind::Error => ERROR_DURATION,
            _ => DEFAULT_DURATION,
        };
        Self {
            kind,
            message: message.into(),
            description: None,
            duration,
            placement: Placement::TopRight,
        }
    }

    /// Attach a longer description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the visible duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Override the screen anchor
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// Notification presentation capability.
///
/// Implementations must be callable from non-UI code at any time; a
/// notice that cannot be shown should be dropped, never panicked on.
pub trait Notifier: Send + Sync {
    /// Schedule a notice
    fn notify(&self, notice: Notice);

    /// Remove every pending notice immediately
    fn dismiss_all(&self);

    fn success(&self, message: &str, description: Option<&str>) {
        self.notify(with_desc(Notice::new(NoticeKind::Success, message), description));
    }

    fn error(&self, message: &str, description: Option<&str>) {
        self.notify(with_desc(Notice::new(NoticeKind::Error, message), description));
    }

    fn warning(&self, message: &str, description: Option<&str>) {
        self.notify(with_desc(Notice::new(NoticeKind::Warning, message), description));
    }

    fn info(&self, message: &str, description: Option<&str>) {
        self.notify(with_desc(Notice::new(NoticeKind::Info, message), description));
    }
}

fn with_desc(notice: Notice, description: Option<&str>) -> Notice {
    match description {
        Some(d) => notice.with_description(d),
        None => notice,
    }
}

/// Drops every notice. Used when no UI shell is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(message = %notice.message, "No notifier attached, notice dropped");
    }

    fn dismiss_all(&self) {}
}

/// Routes notices into `tracing` for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let description = notice.description.as_deref().unwrap_or("");
        match notice.kind {
            NoticeKind::Success => tracing::info!(description, "{}", notice.message),
            NoticeKind::Info => tracing::info!(description, "{}", notice.message),
            NoticeKind::Warning => tracing::warn!(description, "{}", notice.message),
            NoticeKind::Error => tracing::error!(description, "{}", notice.message),
        }
    }

    fn dismiss_all(&self) {}
}
