//! # roomdesk-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository`: list, create, merge-update and delete rooms
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService`: validate input and dispatch to the repository
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `roomdesk-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
