//! Navigation commands: `pwd`, `ls`, `cd`.

use super::{Command, CommandContext, CommandOutput, has_flag, operands};
use crate::config::listing;
use crate::error::ShellError;
use crate::models::{FsNode, OutputLine};

pub struct Pwd;

impl Command for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text(ctx.session.current_path().as_str()))
    }
}

/// `ls [-a] [-l] [path]`
///
/// Short format puts every name on one line, separated by two spaces, with
/// directories suffixed by `/`. Long format prints one synthetic row per
/// entry.
pub struct Ls;

impl Command for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let show_hidden = has_flag(args, 'a');
        let long_format = has_flag(args, 'l');

        let operand = operands(args).next();
        let target = match operand {
            Some(raw) => ctx.resolve(raw),
            None => ctx.cwd(),
        };
        let entries = ctx
            .fs
            .list_children(&target, show_hidden)
            .map_err(|e| ShellError::from_fs(e, "ls", operand.unwrap_or(".")))?;

        if entries.is_empty() {
            return Ok(CommandOutput::empty());
        }

        if long_format {
            let user = &ctx.config.user;
            let lines = entries
                .iter()
                .map(|(name, node)| OutputLine::text(long_row(name, node, user)))
                .collect();
            return Ok(CommandOutput::lines(lines));
        }

        let names: Vec<String> = entries
            .iter()
            .map(|(name, node)| match node {
                FsNode::Directory { .. } => format!("{name}/"),
                FsNode::File { .. } => name.to_string(),
            })
            .collect();
        Ok(CommandOutput::text(&names.join("  ")))
    }
}

fn long_row(name: &str, node: &FsNode, user: &str) -> String {
    let (kind, size) = match node {
        FsNode::Directory { .. } => ('d', listing::DIRECTORY_SIZE),
        FsNode::File { size } => ('-', size.as_str()),
    };
    format!(
        "{kind}{perms}  1 {user} {user}  {size:>width$} {date} {name}",
        perms = listing::PERMISSIONS,
        width = listing::SIZE_WIDTH,
        date = listing::DATE,
    )
}

/// `cd [path]`; with no operand, go home.
pub struct Cd;

impl Command for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let Some(raw) = args.first() else {
            let home = ctx.resolver.home().clone();
            ctx.session.change_directory(home);
            return Ok(CommandOutput::empty());
        };

        let target = ctx.resolve(raw);
        match ctx.fs.lookup(&target) {
            Some(FsNode::Directory { .. }) => {
                log::debug!("cd {target}");
                ctx.session.change_directory(target);
                Ok(CommandOutput::empty())
            }
            Some(FsNode::File { .. }) => Err(ShellError::NotADirectory {
                command: "cd".to_string(),
                operand: raw.clone(),
            }),
            None => Err(ShellError::NotFound {
                command: "cd".to_string(),
                operand: raw.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;

    #[test]
    fn test_pwd_starts_at_home() {
        let mut fx = Fixture::new();
        assert_eq!(fx.text("pwd"), vec!["/Users/student"]);
    }

    #[test]
    fn test_ls_short_format() {
        let mut fx = Fixture::new();
        assert_eq!(fx.text("ls"), vec!["Documents/  Desktop/  Downloads/"]);
    }

    #[test]
    fn test_ls_with_path_operand() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.text("ls Documents"),
            vec!["DH-Projects/  notes.txt  research-ideas.md"]
        );
    }

    #[test]
    fn test_ls_long_format() {
        let mut fx = Fixture::new();
        let lines = fx.text("ls -l Desktop");
        assert_eq!(
            lines,
            vec!["-rwxr-xr-x  1 student student      445B Sep 26 10:30 quick-notes.txt"]
        );

        let lines = fx.text("ls -l");
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "drwxr-xr-x  1 student student      4096 Sep 26 10:30 Documents"
        );
    }

    #[test]
    fn test_ls_hidden_files() {
        let mut fx = Fixture::new();
        fx.run("touch .bashrc").unwrap();
        assert!(!fx.text("ls")[0].contains(".bashrc"));
        assert!(fx.text("ls -a")[0].contains(".bashrc"));
        assert!(fx.text("ls -la").iter().any(|l| l.ends_with(".bashrc")));
        assert!(fx.text("ls -al").iter().any(|l| l.ends_with(".bashrc")));
    }

    #[test]
    fn test_ls_empty_directory_prints_nothing() {
        let mut fx = Fixture::new();
        fx.run("mkdir empty").unwrap();
        assert!(fx.run("ls empty").unwrap().lines.is_empty());
    }

    #[test]
    fn test_ls_errors() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("ls nowhere").unwrap_err().to_string(),
            "ls: nowhere: No such file or directory"
        );
        assert_eq!(
            fx.run("ls Desktop/quick-notes.txt").unwrap_err().to_string(),
            "ls: Desktop/quick-notes.txt: Not a directory"
        );
    }

    #[test]
    fn test_cd_and_back() {
        let mut fx = Fixture::new();
        fx.run("cd Documents/DH-Projects").unwrap();
        assert_eq!(
            fx.session.current_path(),
            &fx.path("/Users/student/Documents/DH-Projects")
        );
        fx.run("cd ..").unwrap();
        assert_eq!(fx.session.current_path(), &fx.path("/Users/student/Documents"));
    }

    #[test]
    fn test_cd_without_operand_goes_home() {
        let mut fx = Fixture::new();
        fx.run("cd /Users").unwrap();
        fx.run("cd").unwrap();
        assert_eq!(fx.session.current_path(), fx.resolver.home());
    }

    #[test]
    fn test_cd_up_from_home_stays_home() {
        let mut fx = Fixture::new();
        fx.run("cd ..").unwrap();
        assert_eq!(fx.session.current_path(), fx.resolver.home());
    }

    #[test]
    fn test_cd_missing_leaves_path() {
        let mut fx = Fixture::new();
        let err = fx.run("cd nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "cd: nonexistent: No such file or directory");
        assert_eq!(fx.session.current_path(), fx.resolver.home());
    }

    #[test]
    fn test_cd_into_file() {
        let mut fx = Fixture::new();
        let err = fx.run("cd Documents/notes.txt").unwrap_err();
        assert_eq!(err.to_string(), "cd: Documents/notes.txt: Not a directory");
        assert_eq!(fx.session.current_path(), fx.resolver.home());
    }
}
