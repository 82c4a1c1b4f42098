//! Shared primitives for the kunai task/board application.
//!
//! Calendar types and arithmetic used across the workspace. Nothing in
//! this crate touches the database or the network.

pub mod types;
pub mod util;
