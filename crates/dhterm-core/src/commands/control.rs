//! Shell control commands: `clear`, `reset`, `help`.

use super::{Command, CommandContext, CommandOutput, ShellAction};
use crate::config::HELP_TEXT;
use crate::error::ShellError;

/// Wipe the rendered output. Filesystem and session are untouched.
pub struct Clear;

impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::action(ShellAction::ClearOutput))
    }
}

/// Restore the whole terminal to its freshly mounted state.
pub struct Reset;

impl Command for Reset {
    fn name(&self) -> &'static str {
        "reset"
    }

    fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::action(ShellAction::Reset))
    }
}

pub struct Help;

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text(HELP_TEXT.trim_end()))
    }
}
