//! Application context holding the user store.

use crate::config::UserServiceConfig;
use crate::repository::{UserRepository, UserStore};

/// Context handed to callers; the store is reachable as `ctx.db`.
#[derive(Debug, Clone)]
pub struct AppContext<R: UserRepository = UserStore> {
    pub db: R,
}

impl<R: UserRepository> AppContext<R> {
    /// Wrap an existing repository
    pub fn new(db: R) -> Self {
        Self { db }
    }
}

impl AppContext {
    /// Fresh context over a store holding the seed records
    pub fn seeded() -> Self {
        Self::new(UserStore::seeded())
    }

    /// Fresh context, seeded unless the configuration disables it
    pub fn from_config(config: &UserServiceConfig) -> Self {
        if config.seed {
            Self::seeded()
        } else {
            Self::new(UserStore::new())
        }
    }
}
