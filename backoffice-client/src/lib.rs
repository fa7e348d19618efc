//! Backoffice Client - HTTP client for the retail back-office API
//!
//! Provides typed, session-aware calls to the back-office REST service:
//! inventory, member accounts, receipts, cash drawer and hot/cold item
//! analytics. Side effects that belong to a UI shell (notifications,
//! navigation) are injected at construction time and default to no-ops.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod navigate;
pub mod notify;
pub mod permission;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{BackofficeClient, AUTH_HEADER};
pub use navigate::{Navigator, NoopNavigator, LOGIN_PAGE};
pub use notify::{Notice, NoticeKind, Notifier, NoopNotifier, Placement, TracingNotifier};
pub use permission::{accessible_pages, can_use_feature, Page};
pub use session::SessionStore;

// Re-export shared types for convenience
pub use shared::{ApiEnvelope, PageRequest, PageResult, CODE_SUCCESS, CODE_UNAUTHORIZED};
pub use shared::models::UserType;
