//! Simulated archive commands: `zip`, `unzip`.
//!
//! Archives have no contents. Sizes shown for created and extracted files
//! are random display strings drawn from [`archive`] ranges; they are
//! flavour text, not a model of compression.

use super::{Command, CommandContext, CommandOutput, has_flag, operands, split_target};
use crate::config::archive;
use crate::error::{FsError, ShellError};
use crate::models::{DisplaySize, FsNode, OutputLine};

/// `zip [-r] archive.zip target...`
///
/// Flags may appear anywhere. Missing targets and directories without
/// `-r` produce warnings, not errors. The archive is only created when at
/// least one target was added.
pub struct Zip;

impl Command for Zip {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let recursive = has_flag(args, 'r');
        let ops: Vec<&str> = operands(args).collect();
        let [archive_name, targets @ ..] = ops.as_slice() else {
            return Err(usage_error());
        };
        if targets.is_empty() {
            return Err(usage_error());
        }

        let (parent, name) = split_target(ctx, archive_name)
            .filter(|(parent, name)| !ctx.fs.is_directory(&parent.join(name)))
            .ok_or_else(|| ShellError::IsADirectory {
                command: "zip".to_string(),
                operand: archive_name.to_string(),
            })?;

        match ctx.fs.lookup(&parent) {
            Some(node) if node.is_directory() => {}
            Some(_) => {
                return Err(ShellError::from_fs(FsError::NotADirectory, "zip", archive_name));
            }
            None => return Err(ShellError::from_fs(FsError::NotFound, "zip", archive_name)),
        }

        let mut lines = Vec::new();
        let mut added = 0;
        for target in targets {
            let key = target.trim_end_matches('/');
            let key = if key.is_empty() { *target } else { key };
            match ctx.fs.lookup(&ctx.resolve(key)) {
                Some(FsNode::Directory { .. }) if !recursive => lines.push(OutputLine::info(
                    format!("zip warning: directory {key} not added (use -r to recurse)"),
                )),
                Some(node) => {
                    let slash = if node.is_directory() { "/" } else { "" };
                    lines.push(OutputLine::text(format!("  adding: {key}{slash} (stored 0%)")));
                    added += 1;
                }
                None => lines.push(OutputLine::info(format!("zip warning: {key} not found"))),
            }
        }

        if added > 0 {
            let size = DisplaySize::random(&mut *ctx.rng, archive::ARCHIVE_SIZE_MB, "MB");
            ctx.fs
                .create_file(&parent, &name, size)
                .map_err(|e| ShellError::from_fs(e, "zip", archive_name))?;
            log::debug!("zip created {} ({added} entries)", parent.join(&name));
            lines.push(OutputLine::text(format!(
                "Archive {archive_name} created successfully"
            )));
        }
        Ok(CommandOutput::lines(lines))
    }
}

fn usage_error() -> ShellError {
    ShellError::Usage {
        command: "zip",
        what: "arguments",
        usage: archive::ZIP_USAGE,
    }
}

/// `unzip archive.zip [-l]`
///
/// The operand only has to name an existing node. With `-l`, print a
/// fixed manifest. Otherwise extract the fixed demo files into the current
/// directory, overwriting same-named files.
pub struct Unzip;

impl Command for Unzip {
    fn name(&self) -> &'static str {
        "unzip"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let list_only = has_flag(args, 'l');
        let archive_name = operands(args).next().ok_or(ShellError::Usage {
            command: "unzip",
            what: "archive name",
            usage: archive::UNZIP_USAGE,
        })?;

        if ctx.fs.lookup(&ctx.resolve(archive_name)).is_none() {
            return Err(ShellError::ArchiveNotFound(archive_name.to_string()));
        }

        let mut lines = vec![OutputLine::text(format!("Archive:  {archive_name}"))];
        if list_only {
            lines.extend(archive::MANIFEST.lines().map(OutputLine::text));
            return Ok(CommandOutput::lines(lines));
        }

        let cwd = ctx.cwd();
        for file in archive::EXTRACTED_FILES {
            let size = DisplaySize::random(&mut *ctx.rng, archive::EXTRACTED_SIZE_KB, "KB");
            ctx.fs
                .create_file(&cwd, file, size)
                .map_err(|e| ShellError::from_fs(e, "unzip", archive_name))?;
            lines.push(OutputLine::text(format!("  inflating: {file}")));
        }
        lines.push(OutputLine::empty());
        lines.push(OutputLine::text(format!(
            "Extraction complete! {} files extracted.",
            archive::EXTRACTED_FILES.len()
        )));
        Ok(CommandOutput::lines(lines))
    }
}
