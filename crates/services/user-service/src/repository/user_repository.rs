//! In-memory user repository implementation.

use std::collections::HashSet;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, User, UserId};
use tracing::{debug, warn};

use super::seed::seed_users;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups and mutations address records by id and fail with
/// `AppError::NotFound` when the id has no record.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// List all users in insertion order
    fn list_users(&self) -> Vec<User>;

    /// Find user by ID
    fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Store a new user under the next free id
    fn add_user(&mut self, new_user: NewUser) -> AppResult<User>;

    /// Replace the fields of the user with `user.id`
    fn update_user(&mut self, user: User) -> AppResult<User>;

    /// Remove user by ID
    fn delete_user(&mut self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by a `Vec`.
///
/// `next_id` is `None` once `UserId::MAX` has been handed out.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: Option<UserId>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: Some(0),
        }
    }

    /// Create a store over existing records.
    ///
    /// Numbering continues after the highest id present. Fails with
    /// `DuplicateId` if two records share an id.
    pub fn with_users(users: Vec<User>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        if let Some(user) = users.iter().find(|u| !seen.insert(u.id)) {
            warn!(user_id = user.id, "Rejected duplicate user id");
            return Err(AppError::DuplicateId(user.id));
        }

        let next_id = match users.iter().map(|u| u.id).max() {
            Some(highest) => highest.checked_add(1),
            None => Some(0),
        };

        Ok(Self { users, next_id })
    }

    /// Create a store holding the seed records.
    ///
    /// Seed ids run from 0 without gaps.
    pub fn seeded() -> Self {
        let users = seed_users();
        let next_id = Some(users.len() as UserId);
        Self { users, next_id }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn position(&self, id: UserId) -> AppResult<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or_not_found(id)
            .map_err(|err| {
                warn!(user_id = id, "User not found");
                err
            })
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for UserStore {
    fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn get_user(&self, id: UserId) -> AppResult<User> {
        let index = self.position(id)?;
        Ok(self.users[index].clone())
    }

    fn add_user(&mut self, new_user: NewUser) -> AppResult<User> {
        let id = self.next_id.ok_or(AppError::IdSpaceExhausted)?;
        let user = User::from_new(id, new_user);
        self.next_id = id.checked_add(1);
        self.users.push(user.clone());

        debug!(user_id = user.id, "Added user");
        Ok(user)
    }

    fn update_user(&mut self, user: User) -> AppResult<User> {
        let index = self.position(user.id)?;
        self.users[index] = user;

        debug!(user_id = self.users[index].id, "Updated user");
        Ok(self.users[index].clone())
    }

    fn delete_user(&mut self, id: UserId) -> AppResult<()> {
        let index = self.position(id)?;
        self.users.remove(index);

        debug!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_user(first_name: &str) -> NewUser {
        NewUser::new(
            first_name,
            "Tester",
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            "Leeds",
        )
    }

    fn ids(store: &UserStore) -> Vec<UserId> {
        store.list_users().iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_empty_store_starts_at_zero() {
        let mut store = UserStore::new();
        assert!(store.is_empty());

        let first = store.add_user(new_user("A")).unwrap();
        let second = store.add_user(new_user("B")).unwrap();

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut store = UserStore::new();
        store.add_user(new_user("A")).unwrap();
        let last = store.add_user(new_user("B")).unwrap();

        store.delete_user(last.id).unwrap();
        let next = store.add_user(new_user("C")).unwrap();

        assert_eq!(next.id, 2);
        assert_eq!(ids(&store), vec![0, 2]);
    }

    #[test]
    fn test_with_users_continues_after_highest_id() {
        let users = vec![
            User::from_new(3, new_user("A")),
            User::from_new(9, new_user("B")),
            User::from_new(5, new_user("C")),
        ];
        let mut store = UserStore::with_users(users).unwrap();

        let added = store.add_user(new_user("D")).unwrap();
        assert_eq!(added.id, 10);
    }

    #[test]
    fn test_with_users_rejects_duplicate_ids() {
        let users = vec![
            User::from_new(0, new_user("A")),
            User::from_new(1, new_user("B")),
            User::from_new(0, new_user("C")),
        ];

        let result = UserStore::with_users(users);

        assert!(matches!(result, Err(AppError::DuplicateId(0))));
    }

    #[test]
    fn test_with_users_empty_starts_at_zero() {
        let mut store = UserStore::with_users(Vec::new()).unwrap();
        assert_eq!(store.add_user(new_user("A")).unwrap().id, 0);
    }

    #[test]
    fn test_highest_id_exhausts_counter() {
        let mut store = UserStore::with_users(vec![User::from_new(UserId::MAX, new_user("A"))]).unwrap();

        let result = store.add_user(new_user("B"));

        assert!(matches!(result, Err(AppError::IdSpaceExhausted)));
        assert_eq!(ids(&store), vec![UserId::MAX]);
    }

    #[test]
    fn test_last_id_is_assigned_once() {
        let mut store = UserStore::with_users(vec![User::from_new(UserId::MAX - 1, new_user("A"))]).unwrap();

        let last = store.add_user(new_user("B")).unwrap();
        assert_eq!(last.id, UserId::MAX);

        store.delete_user(UserId::MAX).unwrap();
        assert!(matches!(store.add_user(new_user("C")), Err(AppError::IdSpaceExhausted)));
        assert_eq!(ids(&store), vec![UserId::MAX - 1]);
    }

    #[test]
    fn test_seeded_matches_checked_construction() {
        let mut seeded = UserStore::seeded();
        let mut checked = UserStore::with_users(seed_users()).unwrap();

        assert_eq!(seeded.list_users(), checked.list_users());
        assert_eq!(
            seeded.add_user(new_user("A")).unwrap(),
            checked.add_user(new_user("A")).unwrap()
        );
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = UserStore::new();
        for name in ["A", "B", "C", "D"] {
            store.add_user(new_user(name)).unwrap();
        }

        store.delete_user(1).unwrap();

        assert_eq!(ids(&store), vec![0, 2, 3]);
    }

    #[test]
    fn test_failed_mutations_leave_store_unchanged() {
        let mut store = UserStore::seeded();
        let before = store.list_users();

        let mut ghost = User::from_new(20, new_user("Ghost"));
        ghost.last_name = "Nobody".to_string();
        assert!(matches!(store.update_user(ghost), Err(AppError::NotFound(20))));
        assert!(matches!(store.delete_user(10), Err(AppError::NotFound(10))));

        assert_eq!(store.list_users(), before);
        // The counter is untouched as well
        assert_eq!(store.add_user(new_user("E")).unwrap().id, 2);
    }

    #[test]
    fn test_add_ignores_caller_id() {
        let mut store = UserStore::seeded();
        let supplied = User::from_new(99, new_user("Caller"));

        let stored = store.add_user(supplied.into()).unwrap();

        assert_eq!(stored.id, 2);
        assert!(store.get_user(99).is_err());
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut store = UserStore::seeded();
        let replacement = User::from_new(1, new_user("Replaced"));

        let updated = store.update_user(replacement.clone()).unwrap();

        assert_eq!(updated, replacement);
        assert_eq!(store.get_user(1).unwrap(), replacement);
        assert_eq!(store.len(), 2);
    }
}
