//! Shop server library.
//!
//! Repository layer over the shop `PostgreSQL` store plus the HTTP entry
//! point, exposed as a library so the CLI and integration tests can reuse
//! it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
