//! Error types for the simulator.
//!
//! None of these ever escape as a fault: the shell renders every
//! [`ShellError`] as an error-styled output line and stays interactive.
//!
//! - [`FsError`] - virtual filesystem lookups and mutations
//! - [`ShellError`] - user-facing command failures
//! - [`ConfigError`] - invalid [`ShellConfig`](crate::ShellConfig) values

use thiserror::Error;

/// Failure of a [`VirtualFs`](crate::VirtualFs) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsError {
    /// Path does not resolve to any node.
    #[error("No such file or directory")]
    NotFound,
    /// A directory was required but a file was found.
    #[error("Not a directory")]
    NotADirectory,
    /// Creation collided with an existing entry.
    #[error("File exists")]
    AlreadyExists,
}

/// User-facing command failure, rendered verbatim as error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{command}: {operand}: No such file or directory")]
    NotFound { command: String, operand: String },

    #[error("{command}: {operand}: Not a directory")]
    NotADirectory { command: String, operand: String },

    #[error("{command}: {operand}: Is a directory")]
    IsADirectory { command: String, operand: String },

    #[error("{command}: cannot create directory '{operand}': File exists")]
    AlreadyExists { command: String, operand: String },

    /// Required argument absent; `what` names it ("operand", "file operand").
    #[error("{command}: missing {what}")]
    MissingOperand {
        command: &'static str,
        what: &'static str,
    },

    /// Too few arguments for a command that prints its usage line.
    #[error("{command}: missing {what}\nUsage: {usage}")]
    Usage {
        command: &'static str,
        what: &'static str,
        usage: &'static str,
    },

    #[error("unzip: cannot find {0}")]
    ArchiveNotFound(String),

    #[error("python: can't open file '{0}': [Errno 2] No such file or directory")]
    ScriptNotFound(String),

    #[error("Unknown command: {0}")]
    UnknownSubcommand(String),

    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
}

impl ShellError {
    /// Attach command and operand context to a filesystem failure.
    pub fn from_fs(err: FsError, command: &str, operand: &str) -> Self {
        let command = command.to_string();
        let operand = operand.to_string();
        match err {
            FsError::NotFound => Self::NotFound { command, operand },
            FsError::NotADirectory => Self::NotADirectory { command, operand },
            FsError::AlreadyExists => Self::AlreadyExists { command, operand },
        }
    }
}

/// Invalid shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid home directory '{0}': must be an absolute path")]
    InvalidHome(String),

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),
}
