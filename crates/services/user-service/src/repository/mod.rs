//! Repository layer for data access.

mod seed;
mod user_repository;

pub use seed::seed_users;
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
