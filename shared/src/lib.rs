//! Shared wire types for the back-office REST API
//!
//! Request/response DTOs exchanged with the remote back-office service.
//! These types are shared between the client SDK and any local tooling
//! that speaks the same envelope format.

pub mod models;
pub mod request;
pub mod response;

pub use request::PageRequest;
pub use response::{ApiEnvelope, PageResult, CODE_SUCCESS, CODE_UNAUTHORIZED};
