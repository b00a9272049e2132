//! User Service Library
//!
//! This crate provides an in-memory user directory with list, get, add,
//! update and delete operations. It can be driven from the `user-service`
//! binary or embedded directly through [`AppContext`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod repository;

use tracing::debug;

use common::AppResult;

use crate::commands::{Command, Output};
use crate::config::UserServiceConfig;

pub use context::AppContext;
pub use repository::{UserRepository, UserStore};

/// Build a fresh context from configuration and run one command against it.
pub fn run(config: &UserServiceConfig, command: Command) -> AppResult<Output> {
    let mut ctx = AppContext::from_config(config);
    debug!(users = ctx.db.len(), "Store ready");

    commands::execute(&mut ctx.db, command)
}
