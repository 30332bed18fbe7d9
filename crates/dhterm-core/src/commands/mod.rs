//! Command trait, registry, and the built-in command set.
//!
//! # Architecture
//!
//! Each command is a unit struct implementing [`Command`]. The
//! [`CommandRegistry`] maps names to boxed commands and dispatches a
//! tokenized line to the matching one. Handlers report user mistakes as
//! `Err(ShellError)`; turning those into error-styled lines is left to
//! [`TerminalShell`](crate::TerminalShell), so no handler ever aborts the
//! session.

mod archive;
mod control;
mod files;
mod navigation;
mod result;
mod tools;

pub use result::{CommandOutput, ShellAction};

use indexmap::IndexMap;
use rand::RngCore;

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::filesystem::VirtualFs;
use crate::models::VirtualPath;
use crate::path::PathResolver;
use crate::session::SessionState;

// =============================================================================
// Command Trait
// =============================================================================

/// Everything a handler may read or mutate.
pub struct CommandContext<'a> {
    pub fs: &'a mut VirtualFs,
    pub session: &'a mut SessionState,
    pub resolver: &'a PathResolver,
    pub config: &'a ShellConfig,
    /// Source for cosmetic random values only.
    pub rng: &'a mut dyn RngCore,
}

impl CommandContext<'_> {
    /// Resolve a path argument against the working directory.
    pub fn resolve(&self, raw: &str) -> VirtualPath {
        self.resolver.resolve(raw, self.session.current_path())
    }

    /// Current working directory.
    pub fn cwd(&self) -> VirtualPath {
        self.session.current_path().clone()
    }
}

/// A single executable command.
pub trait Command: Send + Sync {
    /// The name the user types.
    fn name(&self) -> &'static str;

    /// Run with the arguments that followed the name.
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError>;
}

// =============================================================================
// Registry
// =============================================================================

/// Name-to-command table with dispatch.
///
/// Registration order is kept and used for completion candidates.
pub struct CommandRegistry {
    commands: IndexMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Create a registry holding every built-in command.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(navigation::Pwd));
        registry.register(Box::new(navigation::Ls));
        registry.register(Box::new(navigation::Cd));
        registry.register(Box::new(files::Mkdir));
        registry.register(Box::new(files::Touch));
        registry.register(Box::new(files::Cat));
        registry.register(Box::new(tools::Python));
        registry.register(Box::new(tools::Pip));
        registry.register(Box::new(archive::Zip));
        registry.register(Box::new(archive::Unzip));
        registry.register(Box::new(control::Clear));
        registry.register(Box::new(control::Reset));
        registry.register(Box::new(control::Help));
        registry
    }

    /// Register a command, replacing any existing one with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd.as_ref())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    /// Run `name` with `args`. Names are case-sensitive.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let cmd = self
            .get(name)
            .ok_or_else(|| ShellError::UnknownCommand(name.to_string()))?;
        log::debug!("dispatch {name} {args:?}");
        cmd.execute(args, ctx)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// =============================================================================
// Argument Helpers
// =============================================================================

/// True for `-x` style flags (a lone `-` is an operand).
fn is_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// True if any flag argument contains the short option `c` (`-la` has `l`).
fn has_flag(args: &[String], c: char) -> bool {
    args.iter()
        .filter(|a| is_flag(a))
        .any(|a| a[1..].contains(c))
}

/// Arguments that are not flags, in order.
fn operands(args: &[String]) -> impl Iterator<Item = &str> {
    args.iter().map(String::as_str).filter(|a| !is_flag(a))
}

/// Parent directory and entry name for creating `raw`.
///
/// Returns `None` when `raw` resolves to the root, which has no name.
fn split_target(ctx: &CommandContext<'_>, raw: &str) -> Option<(VirtualPath, String)> {
    let target = ctx.resolve(raw);
    let name = target.file_name()?.to_string();
    let parent = target.parent()?;
    Some((parent, name))
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::OutputLine;

    /// A demo filesystem, fresh session and seeded RNG.
    pub struct Fixture {
        pub fs: VirtualFs,
        pub session: SessionState,
        pub resolver: PathResolver,
        pub config: ShellConfig,
        pub rng: StdRng,
        pub registry: CommandRegistry,
    }

    impl Fixture {
        pub fn new() -> Self {
            let config = ShellConfig::default();
            let home = config.home_path();
            Self {
                fs: VirtualFs::demo(&home),
                session: SessionState::new(home.clone(), config.max_history),
                resolver: PathResolver::new(home),
                config,
                rng: StdRng::seed_from_u64(7),
                registry: CommandRegistry::with_builtins(),
            }
        }

        /// Dispatch a whitespace-separated line.
        pub fn run(&mut self, line: &str) -> Result<CommandOutput, ShellError> {
            let mut words = line.split_whitespace().map(str::to_string);
            let name = words.next().unwrap_or_default();
            let args: Vec<String> = words.collect();
            let mut ctx = CommandContext {
                fs: &mut self.fs,
                session: &mut self.session,
                resolver: &self.resolver,
                config: &self.config,
                rng: &mut self.rng,
            };
            self.registry.dispatch(&name, &args, &mut ctx)
        }

        /// Dispatch and return the rendered text of each line.
        pub fn text(&mut self, line: &str) -> Vec<String> {
            self.run(line)
                .expect("command should succeed")
                .lines
                .iter()
                .map(OutputLine::content)
                .collect()
        }

        pub fn path(&self, s: &str) -> VirtualPath {
            VirtualPath::normalize(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Fixture;
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_names() {
        let names = CommandRegistry::with_builtins().names();
        for expected in [
            "pwd", "ls", "cd", "mkdir", "touch", "cat", "python", "pip", "zip", "unzip", "clear",
            "reset", "help",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_every_name_has_a_handler() {
        let registry = CommandRegistry::with_builtins();
        for name in registry.names() {
            assert_eq!(registry.get(name).map(|c| c.name()), Some(name));
        }
    }

    #[test]
    fn test_unknown_command() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("sl").unwrap_err(),
            ShellError::UnknownCommand("sl".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.run("PWD"), Err(ShellError::UnknownCommand(_))));
    }

    #[test]
    fn test_flag_helpers() {
        let a = args(&["-la", "docs", "-", "-r"]);
        assert!(has_flag(&a, 'l'));
        assert!(has_flag(&a, 'a'));
        assert!(has_flag(&a, 'r'));
        assert!(!has_flag(&a, 'x'));
        assert_eq!(operands(&a).collect::<Vec<_>>(), vec!["docs", "-"]);
    }
}
