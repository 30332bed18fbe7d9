//! Command execution result type.

use crate::models::OutputLine;

/// Shell-level effect requested by a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShellAction {
    #[default]
    None,
    /// Wipe the rendered output log only.
    ClearOutput,
    /// Restore filesystem, session and output log to their initial state.
    Reset,
}

/// Output lines plus an optional shell action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandOutput {
    pub lines: Vec<OutputLine>,
    pub action: ShellAction,
}

impl CommandOutput {
    /// No output, no action.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Multi-line text, one output line per `\n`-separated line.
    pub fn text(block: &str) -> Self {
        Self::lines(block.lines().map(OutputLine::text).collect())
    }

    pub fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            action: ShellAction::None,
        }
    }

    /// A result that only carries an action.
    pub fn action(action: ShellAction) -> Self {
        Self {
            lines: vec![],
            action,
        }
    }
}
