//! Command dispatch over a user repository.

use serde::Serialize;
use tracing::info;

use common::AppResult;
use domain::{NewUser, User, UserId};

use crate::repository::UserRepository;

/// A single directory operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Get { id: UserId },
    Add(NewUser),
    Update(User),
    Delete { id: UserId },
}

/// Result of a command, rendered as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Users(Vec<User>),
    User(User),
    Deleted { deleted: UserId },
}

impl Output {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run one command against the repository.
pub fn execute<R: UserRepository>(repo: &mut R, command: Command) -> AppResult<Output> {
    let output = match command {
        Command::List => Output::Users(repo.list_users()),
        Command::Get { id } => Output::User(repo.get_user(id)?),
        Command::Add(new_user) => {
            let user = repo.add_user(new_user)?;
            info!(user_id = user.id, "Created user {}", user.full_name());
            Output::User(user)
        }
        Command::Update(user) => {
            let user = repo.update_user(user)?;
            info!(user_id = user.id, "Updated user");
            Output::User(user)
        }
        Command::Delete { id } => {
            repo.delete_user(id)?;
            info!(user_id = id, "Deleted user");
            Output::Deleted { deleted: id }
        }
    };

    Ok(output)
}
