//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.

pub mod user;

pub use user::{NewUser, User, UserId};
