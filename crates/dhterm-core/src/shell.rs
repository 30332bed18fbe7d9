//! Terminal orchestration: input lines and keys in, rendered lines out.
//!
//! # Architecture
//!
//! [`TerminalShell`] owns everything one terminal instance needs: the
//! filesystem, the session, the command registry and the bounded output
//! log. Hosts forward raw keys with [`TerminalShell::handle_key`] (or call
//! [`submit`](TerminalShell::submit) directly) and render the returned
//! [`Rendered`] lines. Every call runs to completion; there is no
//! asynchronous state.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::autocomplete::{AutocompleteResult, Completer};
use crate::commands::{CommandContext, CommandRegistry, ShellAction};
use crate::config::{ShellConfig, WELCOME_TEXT};
use crate::filesystem::VirtualFs;
use crate::models::{OutputLine, OutputLog};
use crate::parser::tokenize;
use crate::path::PathResolver;
use crate::session::SessionState;

// =============================================================================
// Host-facing types
// =============================================================================

/// Key events the shell interprets. Everything else stays with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    Tab,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Tab" => Some(Self::Tab),
            _ => None,
        }
    }
}

/// Lines appended by one call, in order.
///
/// When `cleared` is set the host must drop everything it showed before
/// rendering `lines`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendered {
    pub cleared: bool,
    pub lines: Vec<OutputLine>,
}

/// What the host should do with its input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEdit {
    Keep,
    Replace(String),
}

/// Outcome of [`TerminalShell::handle_key`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyOutcome {
    pub input: InputEdit,
    pub rendered: Rendered,
}

impl KeyOutcome {
    fn keep() -> Self {
        Self {
            input: InputEdit::Keep,
            rendered: Rendered::default(),
        }
    }

    fn replace(input: impl Into<String>) -> Self {
        Self {
            input: InputEdit::Replace(input.into()),
            rendered: Rendered::default(),
        }
    }
}

// =============================================================================
// TerminalShell
// =============================================================================

/// One independent terminal instance.
pub struct TerminalShell {
    config: ShellConfig,
    resolver: PathResolver,
    registry: CommandRegistry,
    /// Registry names in registration order, for completion.
    command_names: Vec<&'static str>,
    fs: VirtualFs,
    session: SessionState,
    output: OutputLog,
    rng: StdRng,
}

impl TerminalShell {
    /// Create a shell showing the welcome banner.
    ///
    /// `config` is expected to have passed [`ShellConfig::validate`]; zero
    /// limits are raised to one.
    pub fn new(config: ShellConfig) -> Self {
        let home = config.home_path();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let registry = CommandRegistry::with_builtins();
        let mut shell = Self {
            resolver: PathResolver::new(home.clone()),
            command_names: registry.names(),
            registry,
            fs: VirtualFs::demo(&home),
            session: SessionState::new(home, config.max_history),
            output: OutputLog::new(config.max_output_lines.max(1)),
            rng,
            config,
        };
        shell.welcome();
        log::info!("terminal ready at {}", shell.session.current_path());
        shell
    }

    /// Default configuration with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ShellConfig {
            seed: Some(seed),
            ..ShellConfig::default()
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// `{user}@{host}:{path}$ ` with home shown as `~`.
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.config.user,
            self.config.host,
            self.session.current_path().display_from(self.resolver.home())
        )
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn command_names(&self) -> &[&'static str] {
        &self.command_names
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Run a submitted line. Blank lines do nothing.
    pub fn submit(&mut self, line: &str) -> Rendered {
        let line = line.trim();
        let mut rendered = Rendered::default();
        if line.is_empty() {
            return rendered;
        }

        self.session.record_command(line);
        let echo = OutputLine::command(self.prompt(), line);
        self.emit(&mut rendered, echo);

        let words = tokenize(line);
        let Some((name, args)) = words.split_first() else {
            return rendered;
        };

        let mut ctx = CommandContext {
            fs: &mut self.fs,
            session: &mut self.session,
            resolver: &self.resolver,
            config: &self.config,
            rng: &mut self.rng,
        };
        match self.registry.dispatch(name, args, &mut ctx) {
            Ok(out) => match out.action {
                ShellAction::None => {
                    for line in out.lines {
                        self.emit(&mut rendered, line);
                    }
                }
                ShellAction::ClearOutput => return self.clear_output(),
                ShellAction::Reset => return self.reset(),
            },
            Err(err) => {
                log::debug!("{name} failed: {err}");
                for text in err.to_string().lines() {
                    self.emit(&mut rendered, OutputLine::error(text));
                }
            }
        }
        rendered
    }

    /// Interpret a key press given the current input line.
    pub fn handle_key(&mut self, key: Key, line: &str) -> KeyOutcome {
        match key {
            Key::Enter => KeyOutcome {
                input: InputEdit::Replace(String::new()),
                rendered: self.submit(line),
            },
            Key::ArrowUp => match self.session.recall_previous() {
                Some(entry) => KeyOutcome::replace(entry),
                None => KeyOutcome::keep(),
            },
            // Past the newest entry the input goes blank
            Key::ArrowDown => KeyOutcome::replace(self.session.recall_next().unwrap_or_default()),
            Key::Tab => self.complete(line),
        }
    }

    /// Tab completion. Several candidates are listed without touching the
    /// input; none is a no-op.
    pub fn complete(&mut self, line: &str) -> KeyOutcome {
        match self.completer().complete(line) {
            AutocompleteResult::Single(completed) => KeyOutcome::replace(completed),
            AutocompleteResult::Multiple(candidates) => {
                let mut rendered = Rendered::default();
                let echo = OutputLine::command(self.prompt(), line);
                self.emit(&mut rendered, echo);
                self.emit(&mut rendered, OutputLine::text(candidates.join("  ")));
                KeyOutcome {
                    input: InputEdit::Keep,
                    rendered,
                }
            }
            AutocompleteResult::None => KeyOutcome::keep(),
        }
    }

    /// Ghost-text suffix for the current input.
    pub fn hint(&self, line: &str) -> Option<String> {
        self.completer().hint(line)
    }

    fn completer(&self) -> Completer<'_> {
        Completer {
            commands: &self.command_names,
            fs: &self.fs,
            resolver: &self.resolver,
            current: self.session.current_path(),
        }
    }

    // -------------------------------------------------------------------------
    // Actions (shared by commands and host buttons)
    // -------------------------------------------------------------------------

    /// Drop all rendered output. Filesystem and session are kept.
    pub fn clear_output(&mut self) -> Rendered {
        self.output.clear();
        Rendered {
            cleared: true,
            lines: vec![],
        }
    }

    /// Restore filesystem, session and output to their initial state.
    pub fn reset(&mut self) -> Rendered {
        let home = self.resolver.home().clone();
        self.fs = VirtualFs::demo(&home);
        self.session = SessionState::new(home, self.config.max_history);
        self.output.clear();
        log::info!("terminal reset");

        let mut rendered = self.welcome();
        rendered.cleared = true;
        rendered
    }

    fn welcome(&mut self) -> Rendered {
        let mut rendered = Rendered::default();
        for text in WELCOME_TEXT.lines() {
            self.emit(&mut rendered, OutputLine::info(text));
        }
        self.emit(&mut rendered, OutputLine::empty());
        rendered
    }

    fn emit(&mut self, rendered: &mut Rendered, line: OutputLine) {
        rendered.lines.push(self.output.push(line).clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineStyle, OutputLineData};

    fn shell() -> TerminalShell {
        TerminalShell::with_seed(42)
    }

    fn contents(rendered: &Rendered) -> Vec<String> {
        rendered.lines.iter().map(OutputLine::content).collect()
    }

    #[test]
    fn test_new_shows_welcome() {
        let sh = shell();
        let lines: Vec<_> = sh.output().iter().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].content(), "Welcome to the Terminal Simulator!");
        assert_eq!(lines[0].style(), LineStyle::Info);
        assert_eq!(lines[3].data, OutputLineData::Empty);
    }

    #[test]
    fn test_prompt_tracks_directory() {
        let mut sh = shell();
        assert_eq!(sh.prompt(), "student@computer:~$ ");
        sh.submit("cd Documents");
        assert_eq!(sh.prompt(), "student@computer:~/Documents$ ");
        sh.submit("cd /");
        assert_eq!(sh.prompt(), "student@computer:/$ ");
    }

    #[test]
    fn test_submit_echoes_then_outputs() {
        let mut sh = shell();
        let rendered = sh.submit("pwd");
        assert!(!rendered.cleared);
        assert_eq!(
            contents(&rendered),
            vec!["student@computer:~$ pwd", "/Users/student"]
        );
        assert_eq!(rendered.lines[0].style(), LineStyle::Command);
        assert_eq!(*sh.session().history(), vec!["pwd"]);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut sh = shell();
        let before = sh.output().len();
        assert_eq!(sh.submit("   "), Rendered::default());
        assert_eq!(sh.output().len(), before);
        assert!(sh.session().history().is_empty());
    }

    #[test]
    fn test_errors_render_as_error_lines() {
        let mut sh = shell();
        let rendered = sh.submit("frobnicate");
        assert_eq!(rendered.lines.len(), 2);
        assert_eq!(rendered.lines[1].style(), LineStyle::Error);
        assert_eq!(
            rendered.lines[1].content(),
            "Command not found: frobnicate. Type 'help' for available commands."
        );

        let rendered = sh.submit("zip");
        assert_eq!(rendered.lines.len(), 3);
        assert!(rendered.lines[1..].iter().all(|l| l.style() == LineStyle::Error));
    }

    #[test]
    fn test_quoted_arguments() {
        let mut sh = shell();
        sh.submit("mkdir \"my notes\"");
        assert!(sh.fs().is_directory(&crate::VirtualPath::normalize("/Users/student/my notes")));
    }

    #[test]
    fn test_clear_keeps_state() {
        let mut sh = shell();
        sh.submit("mkdir proj");
        sh.submit("cd proj");
        let rendered = sh.submit("clear");
        assert!(rendered.cleared);
        assert!(rendered.lines.is_empty());
        assert!(sh.output().is_empty());
        assert_eq!(sh.session().current_path().as_str(), "/Users/student/proj");
        assert_eq!(sh.session().history().len(), 3);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sh = shell();
        let fresh_fs = sh.fs().clone();
        sh.submit("mkdir proj");
        sh.submit("cd proj");
        let rendered = sh.submit("reset");
        assert!(rendered.cleared);
        assert_eq!(rendered.lines.len(), 4);
        assert_eq!(sh.fs(), &fresh_fs);
        assert_eq!(sh.session().current_path().as_str(), "/Users/student");
        assert!(sh.session().history().is_empty());
        assert_eq!(sh.output().len(), 4);
    }

    #[test]
    fn test_reset_command_matches_button() {
        let mut by_command = shell();
        let mut by_button = shell();
        for sh in [&mut by_command, &mut by_button] {
            sh.submit("mkdir proj");
            sh.submit("cd proj");
        }
        let a = by_command.submit("reset");
        let b = by_button.reset();
        assert_eq!(a, b);
        assert_eq!(by_command.fs(), by_button.fs());
        assert_eq!(by_command.session(), by_button.session());
    }

    #[test]
    fn test_output_ids_never_repeat_across_clear() {
        let mut sh = shell();
        let last = sh.output().iter().last().map(|l| l.id).unwrap();
        sh.clear_output();
        let rendered = sh.submit("pwd");
        assert!(rendered.lines[0].id > last);
    }

    #[test]
    fn test_history_keys() {
        let mut sh = shell();
        sh.submit("pwd");
        sh.submit("ls");
        assert_eq!(
            sh.handle_key(Key::ArrowUp, "").input,
            InputEdit::Replace("ls".into())
        );
        assert_eq!(
            sh.handle_key(Key::ArrowUp, "ls").input,
            InputEdit::Replace("pwd".into())
        );
        assert_eq!(
            sh.handle_key(Key::ArrowDown, "pwd").input,
            InputEdit::Replace("ls".into())
        );
        assert_eq!(
            sh.handle_key(Key::ArrowDown, "ls").input,
            InputEdit::Replace(String::new())
        );
    }

    #[test]
    fn test_arrow_up_without_history_keeps_input() {
        let mut sh = shell();
        assert_eq!(sh.handle_key(Key::ArrowUp, "draft").input, InputEdit::Keep);
    }

    #[test]
    fn test_enter_submits_and_clears_input() {
        let mut sh = shell();
        let outcome = sh.handle_key(Key::Enter, "pwd");
        assert_eq!(outcome.input, InputEdit::Replace(String::new()));
        assert_eq!(outcome.rendered.lines.len(), 2);
    }

    #[test]
    fn test_tab_single_replaces_input() {
        let mut sh = shell();
        let outcome = sh.handle_key(Key::Tab, "cd Desk");
        assert_eq!(outcome.input, InputEdit::Replace("cd Desktop".into()));
        assert!(outcome.rendered.lines.is_empty());
    }

    #[test]
    fn test_tab_multiple_lists_candidates() {
        let mut sh = shell();
        let outcome = sh.handle_key(Key::Tab, "cd Do");
        assert_eq!(outcome.input, InputEdit::Keep);
        assert_eq!(
            contents(&outcome.rendered),
            vec!["student@computer:~$ cd Do", "Documents  Downloads"]
        );
        assert!(sh.session().history().is_empty());
    }

    #[test]
    fn test_tab_without_candidates_is_noop() {
        let mut sh = shell();
        let before = sh.output().len();
        assert_eq!(sh.handle_key(Key::Tab, "qq"), KeyOutcome::keep());
        assert_eq!(sh.output().len(), before);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("Tab"), Some(Key::Tab));
        assert_eq!(Key::from_name("ArrowLeft"), None);
    }

    #[test]
    fn test_output_log_is_bounded() {
        let mut sh = TerminalShell::new(ShellConfig {
            max_output_lines: 5,
            seed: Some(1),
            ..ShellConfig::default()
        });
        for _ in 0..10 {
            sh.submit("pwd");
        }
        assert_eq!(sh.output().len(), 5);
    }

    #[test]
    fn test_seeded_shells_agree() {
        let mut a = TerminalShell::with_seed(9);
        let mut b = TerminalShell::with_seed(9);
        for sh in [&mut a, &mut b] {
            sh.submit("touch a.txt");
            sh.submit("zip out.zip a.txt");
        }
        assert_eq!(a.fs(), b.fs());
    }
}
