//! File commands: `mkdir`, `touch`, `cat`.

use super::{Command, CommandContext, CommandOutput, operands, split_target};
use crate::config::samples;
use crate::error::ShellError;
use crate::models::{DisplaySize, FsNode};

pub struct Mkdir;

impl Command for Mkdir {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let raw = operands(args).next().ok_or(ShellError::MissingOperand {
            command: "mkdir",
            what: "operand",
        })?;

        // `/` resolves to the root, which always exists
        let (parent, name) = split_target(ctx, raw).ok_or_else(|| ShellError::AlreadyExists {
            command: "mkdir".to_string(),
            operand: raw.to_string(),
        })?;
        ctx.fs
            .create_directory(&parent, &name)
            .map_err(|e| ShellError::from_fs(e, "mkdir", raw))?;
        log::debug!("mkdir {}", parent.join(&name));
        Ok(CommandOutput::empty())
    }
}

/// Create a zero-size file, or refresh an existing one.
pub struct Touch;

impl Command for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let raw = operands(args).next().ok_or(ShellError::MissingOperand {
            command: "touch",
            what: "file operand",
        })?;

        let Some((parent, name)) = split_target(ctx, raw) else {
            return Ok(CommandOutput::empty());
        };
        ctx.fs
            .create_file(&parent, &name, DisplaySize::zero())
            .map_err(|e| ShellError::from_fs(e, "touch", raw))?;
        Ok(CommandOutput::empty())
    }
}

/// Print canned sample content chosen by the file extension.
pub struct Cat;

impl Command for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let raw = operands(args).next().ok_or(ShellError::MissingOperand {
            command: "cat",
            what: "file operand",
        })?;

        match ctx.fs.lookup(&ctx.resolve(raw)) {
            Some(FsNode::File { .. }) => Ok(CommandOutput::text(sample_for(raw))),
            Some(FsNode::Directory { .. }) => Err(ShellError::IsADirectory {
                command: "cat".to_string(),
                operand: raw.to_string(),
            }),
            None => Err(ShellError::NotFound {
                command: "cat".to_string(),
                operand: raw.to_string(),
            }),
        }
    }
}

fn sample_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("txt") => samples::TXT,
        Some("md") => samples::MD,
        Some("py") => samples::PY,
        Some("csv") => samples::CSV,
        _ => samples::BINARY,
    }
}
