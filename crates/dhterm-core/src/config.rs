//! Shell configuration.
//!
//! Compile-time constants and text assets (loaded with `include_str!`) live
//! here alongside [`ShellConfig`], the per-instance settings a host may
//! override from TOML or JSON.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::VirtualPath;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Banner shown when a terminal is mounted or reset.
pub const WELCOME_TEXT: &str = include_str!("../assets/text/welcome.txt");

// =============================================================================
// Session Defaults
// =============================================================================

/// Home directory of the practice account.
pub const DEFAULT_HOME: &str = "/Users/student";

/// User name shown in the prompt and in `ls -l`.
pub const DEFAULT_USER: &str = "student";

/// Host name shown in the prompt.
pub const DEFAULT_HOST: &str = "computer";

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Maximum number of rendered output lines to keep.
pub const MAX_OUTPUT_LINES: usize = 1000;

// =============================================================================
// Command Output Constants
// =============================================================================

/// Synthetic values for `ls -l`.
pub mod listing {
    /// Permission bits shown for every entry.
    pub const PERMISSIONS: &str = "rwxr-xr-x";
    /// Placeholder modification date.
    pub const DATE: &str = "Sep 26 10:30";
    /// Size column for directories.
    pub const DIRECTORY_SIZE: &str = "4096";
    /// Width of the right-aligned size column.
    pub const SIZE_WIDTH: usize = 8;
}

/// Canned `cat` output keyed by file extension.
pub mod samples {
    pub const TXT: &str = "This is a sample text file.\n\
        It contains some research notes about digital humanities.\n\
        Lorem ipsum dolor sit amet...";
    pub const MD: &str = "# Research Ideas\n\n\
        ## Text Analysis Project\n\
        - Analyze Victorian novels\n\
        - Use Python and NLTK\n\
        - Create visualizations";
    pub const PY: &str = "#!/usr/bin/env python3\n\n\
        import pandas as pd\n\
        import matplotlib.pyplot as plt\n\n\
        # Sample Python script for text analysis";
    pub const CSV: &str = "title,author,year,genre\n\
        \"Pride and Prejudice\",\"Jane Austen\",1813,\"Romance\"\n\
        \"Frankenstein\",\"Mary Shelley\",1818,\"Gothic\"";
    pub const BINARY: &str = "Binary file content (use appropriate viewer)";
}

/// Canned text for the simulated `python` and `pip` tools.
pub mod tools {
    pub const PYTHON_BANNER: &str = "Python 3.9.7 (interactive mode not supported in simulator)\n\
        Use: python filename.py to run scripts";
    pub const PIP_USAGE: &str = "Usage: pip <command> [options]";
    pub const PIP_PLACEHOLDER_PACKAGE: &str = "package-name";
    pub const PIP_LIST: &str = "Package    Version\n\
        ---------- -------\n\
        pandas     1.3.3\n\
        matplotlib 3.4.3\n\
        nltk       3.6.2\n\
        numpy      1.21.2";
}

/// Simulated archive behaviour for `zip` / `unzip`.
///
/// Sizes are display-only flavour text drawn uniformly from the given
/// ranges; they do not model compression.
pub mod archive {
    /// Range (in MB) for the size shown on a freshly created archive.
    pub const ARCHIVE_SIZE_MB: (f64, f64) = (1.0, 6.0);
    /// Range (in KB) for the size shown on each extracted file.
    pub const EXTRACTED_SIZE_KB: (f64, f64) = (1.0, 11.0);
    /// Files materialised by `unzip`.
    pub const EXTRACTED_FILES: &[&str] = &["sample-data.txt", "research-notes.md", "metadata.json"];
    /// Table printed by `unzip -l` after the `Archive:` header.
    pub const MANIFEST: &str = "  Length      Date    Time    Name\n\
        ---------  ---------- -----   ----\n\
        \x20    1234  09-27-2024 10:30   sample-data.txt\n\
        \x20    5678  09-27-2024 10:30   research-notes.md\n\
        \x20     987  09-27-2024 10:30   metadata.json\n\
        ---------                     -------\n\
        \x20    7899                     3 files";
    pub const ZIP_USAGE: &str =
        "zip archive.zip file1 file2... or zip -r archive.zip directory/";
    pub const UNZIP_USAGE: &str = "unzip archive.zip [-l to list contents]";
}

// =============================================================================
// ShellConfig
// =============================================================================

/// Per-instance settings for a [`TerminalShell`](crate::TerminalShell).
///
/// Every field has a default, so a partial TOML or JSON document only needs
/// to name what it overrides:
///
/// ```toml
/// home = "/home/ada"
/// user = "ada"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Absolute home directory; the demo dataset is seeded here.
    pub home: String,
    /// User name for the prompt and long listings.
    pub user: String,
    /// Host name for the prompt.
    pub host: String,
    /// Command history capacity.
    pub max_history: usize,
    /// Rendered output log capacity.
    pub max_output_lines: usize,
    /// Fixed seed for the cosmetic size generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME.to_string(),
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            max_history: MAX_COMMAND_HISTORY,
            max_output_lines: MAX_OUTPUT_LINES,
            seed: None,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()
    }

    /// Check invariants that serde cannot express.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.home.starts_with('/') {
            return Err(ConfigError::InvalidHome(self.home));
        }
        if self.max_history == 0 {
            return Err(ConfigError::ZeroLimit("max_history"));
        }
        if self.max_output_lines == 0 {
            return Err(ConfigError::ZeroLimit("max_output_lines"));
        }
        Ok(self)
    }

    /// Canonical home path.
    pub fn home_path(&self) -> VirtualPath {
        VirtualPath::normalize(&self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.home, "/Users/student");
        assert_eq!(config.user, "student");
        assert_eq!(config.host, "computer");
        assert_eq!(config.max_history, MAX_COMMAND_HISTORY);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ShellConfig::from_toml("user = \"ada\"\nseed = 7\n").unwrap();
        assert_eq!(config.user, "ada");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.home, DEFAULT_HOME);
        assert_eq!(config.max_output_lines, MAX_OUTPUT_LINES);
    }

    #[test]
    fn test_relative_home_rejected() {
        let err = ShellConfig::from_toml("home = \"Users/ada\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHome(ref h) if h == "Users/ada"));
    }

    #[test]
    fn test_zero_history_rejected() {
        let err = ShellConfig::from_toml("max_history = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroLimit("max_history")));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ShellConfig::from_toml("home = "),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_home_path_is_normalized() {
        let config = ShellConfig {
            home: "/home//ada/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.home_path().as_str(), "/home/ada");
    }

    #[test]
    fn test_help_text_lists_commands() {
        for name in ["pwd", "ls", "cd", "mkdir", "touch", "cat", "zip", "unzip"] {
            assert!(HELP_TEXT.contains(name), "help text should mention {name}");
        }
    }
}
