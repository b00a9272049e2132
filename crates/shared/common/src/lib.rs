//! Common utilities shared across crates.
//!
//! This crate provides the unified error type used by the store and the
//! command layer.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
