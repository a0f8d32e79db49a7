//! Shop Core - Shared types library.
//!
//! This crate provides the types every other shop component agrees on:
//! - `server` - Repository layer and HTTP entry point
//! - `cli` - Migrations and demonstration commands
//!
//! # Architecture
//!
//! The core crate holds no I/O. Database encoding for the identifier
//! newtypes is opt-in through the `postgres` feature, so the types can be
//! used without pulling in `sqlx`.
//!
//! # Modules
//!
//! - [`types`] - Entity identifiers and order status vocabularies

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
