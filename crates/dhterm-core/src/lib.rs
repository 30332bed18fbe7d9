//! Core of a browser-embeddable practice terminal.
//!
//! Learners type shell commands against an in-memory filesystem; nothing
//! touches the host machine. This crate is platform-independent and holds
//! all the behaviour. Hosts (the wasm component, the native CLI) only
//! forward input and render [`OutputLine`]s.
//!
//! # Layout
//!
//! - [`VirtualFs`] - the directory tree, seeded with a demo dataset
//! - [`PathResolver`] - turns typed paths into canonical [`VirtualPath`]s
//! - [`CommandRegistry`] - built-in commands behind the [`Command`] trait
//! - [`SessionState`] - working directory and recallable history
//! - [`TerminalShell`] - ties it together: tokenizing, dispatch, completion
//!
//! # Example
//!
//! ```
//! use dhterm_core::TerminalShell;
//!
//! let mut shell = TerminalShell::with_seed(1);
//! let rendered = shell.submit("pwd");
//! assert_eq!(rendered.lines[1].content(), "/Users/student");
//! ```

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod models;
pub mod parser;
pub mod path;
pub mod session;
pub mod shell;

pub use autocomplete::{AutocompleteResult, Completer};
pub use commands::{Command, CommandContext, CommandOutput, CommandRegistry, ShellAction};
pub use config::ShellConfig;
pub use error::{ConfigError, FsError, ShellError};
pub use filesystem::VirtualFs;
pub use models::{DisplaySize, FsNode, LineStyle, OutputLine, OutputLineData, OutputLog, VirtualPath};
pub use parser::tokenize;
pub use path::PathResolver;
pub use session::SessionState;
pub use shell::{InputEdit, Key, KeyOutcome, Rendered, TerminalShell};
