//! # roomdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for rooms under `/api/v1/rooms`
//!   (list, create, merge-update, delete; the room id travels in `?id=`)
//! - Serve the **trial-expired page**, rendered server-side with askama and
//!   free of JavaScript: the only action is a `mailto:` link
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `roomdesk-app` (for port traits and services) and `roomdesk-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
