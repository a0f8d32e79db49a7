//! Core types for the shop backend.

pub mod id;
pub mod status;

pub use id::*;
pub use status::{OrderStatus, PickupMethod, UnknownVariant};
