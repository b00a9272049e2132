//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use domain::{NewUser, User, UserId};

use crate::commands::Command;

/// In-memory user directory
#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(about = "In-memory user directory")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start from an empty store instead of the seed records
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users
    List,
    /// Show a single user
    Get { id: UserId },
    /// Add a user; the id is assigned by the store
    Add(UserArgs),
    /// Replace the fields of an existing user
    Update {
        id: UserId,
        #[command(flatten)]
        fields: UserArgs,
    },
    /// Remove a user
    Delete { id: UserId },
}

/// User fields shared by `add` and `update`
#[derive(Args, Debug)]
pub struct UserArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// RFC 3339 timestamp, e.g. 1985-12-31T00:00:00Z
    #[arg(long)]
    pub date_of_birth: DateTime<Utc>,
    #[arg(long)]
    pub location_of_birth: String,
}

impl From<UserArgs> for NewUser {
    fn from(args: UserArgs) -> Self {
        NewUser::new(
            args.first_name,
            args.last_name,
            args.date_of_birth,
            args.location_of_birth,
        )
    }
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::List => Command::List,
            Commands::Get { id } => Command::Get { id },
            Commands::Add(args) => Command::Add(args.into()),
            Commands::Update { id, fields } => Command::Update(User::from_new(id, fields.into())),
            Commands::Delete { id } => Command::Delete { id },
        }
    }
}
