//! Typed operation modules
//!
//! One module per back-office domain. Every operation serializes a
//! typed request, invokes the HTTP core and returns the decoded
//! envelope — callers branch on `code` themselves. No retries, no
//! caching, no de-duplication of concurrent identical calls.

mod auth;
mod cash;
mod design;
mod item;
mod member;
mod order;
mod print;
mod receipt;
