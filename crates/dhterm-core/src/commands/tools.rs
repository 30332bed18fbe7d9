//! Simulated Python tooling. Nothing is ever executed.

use super::{Command, CommandContext, CommandOutput};
use crate::config::tools;
use crate::error::ShellError;

/// `python [script.py]`
///
/// Any argument ending in `.py` "runs"; the file need not exist.
pub struct Python;

impl Command for Python {
    fn name(&self) -> &'static str {
        "python"
    }

    fn execute(
        &self,
        args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let Some(script) = args.first() else {
            return Ok(CommandOutput::text(tools::PYTHON_BANNER));
        };
        if !script.ends_with(".py") {
            return Err(ShellError::ScriptNotFound(script.clone()));
        }
        Ok(CommandOutput::text(&format!(
            "Running {script}...\n\
             Hello, Digital Humanities World!\n\
             Script completed successfully."
        )))
    }
}

/// `pip install [package]` and `pip list`.
pub struct Pip;

impl Command for Pip {
    fn name(&self) -> &'static str {
        "pip"
    }

    fn execute(
        &self,
        args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        match args.first().map(String::as_str) {
            None => Ok(CommandOutput::text(tools::PIP_USAGE)),
            Some("install") => {
                let package = args
                    .get(1)
                    .map(String::as_str)
                    .unwrap_or(tools::PIP_PLACEHOLDER_PACKAGE);
                Ok(CommandOutput::text(&format!(
                    "Collecting {package}\n\
                     Installing collected packages: {package}\n\
                     Successfully installed {package}"
                )))
            }
            Some("list") => Ok(CommandOutput::text(tools::PIP_LIST)),
            Some(other) => Err(ShellError::UnknownSubcommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;

    #[test]
    fn test_python_banner() {
        let mut fx = Fixture::new();
        assert_eq!(fx.text("python").join("\n"), tools::PYTHON_BANNER);
    }

    #[test]
    fn test_python_runs_any_py() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.text("python analyze.py"),
            vec![
                "Running analyze.py...",
                "Hello, Digital Humanities World!",
                "Script completed successfully."
            ]
        );
    }

    #[test]
    fn test_python_rejects_other_files() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("python notes.txt").unwrap_err().to_string(),
            "python: can't open file 'notes.txt': [Errno 2] No such file or directory"
        );
    }

    #[test]
    fn test_pip_install() {
        let mut fx = Fixture::new();
        assert_eq!(fx.text("pip install nltk")[2], "Successfully installed nltk");
        assert_eq!(
            fx.text("pip install")[0],
            format!("Collecting {}", tools::PIP_PLACEHOLDER_PACKAGE)
        );
    }

    #[test]
    fn test_pip_list_and_usage() {
        let mut fx = Fixture::new();
        assert_eq!(fx.text("pip list").len(), 6);
        assert_eq!(fx.text("pip"), vec![tools::PIP_USAGE]);
    }

    #[test]
    fn test_pip_unknown_subcommand() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("pip freeze").unwrap_err().to_string(),
            "Unknown command: freeze"
        );
    }
}
