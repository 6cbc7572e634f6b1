//! # roomdesk-domain
//!
//! Pure domain model for the roomdesk hotel management service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Rooms** (schemaless room documents with a few required fields)
//! - Define the **Trial notice** shown once a trial subscription has expired
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod room;
pub mod trial;
