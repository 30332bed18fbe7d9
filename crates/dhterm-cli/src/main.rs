//! Native REPL for the dhterm practice terminal.
//!
//! Reads lines from stdin and prints the shell's output with ANSI colors.
//! A line ending in a tab character is completed instead of submitted.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dhterm_core::{
    InputEdit, Key, LineStyle, OutputLine, Rendered, ShellConfig, TerminalShell,
};

#[derive(Parser)]
#[command(name = "dhterm")]
#[command(about = "Practice shell commands against a simulated filesystem")]
#[command(version)]
struct Cli {
    /// Run this command line and exit (repeatable, runs in order)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// TOML file overriding home, user, host and limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for generated file sizes (makes output reproducible)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ShellConfig::from_toml(&source)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => ShellConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let interactive = cli.commands.is_empty() && io::stdin().is_terminal();
    let printer = Printer {
        color: !cli.no_color && io::stdout().is_terminal(),
        echo: !interactive,
    };
    let mut shell = TerminalShell::new(config);
    let mut out = io::stdout().lock();

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            printer.print(&mut out, &shell.submit(line))?;
        }
        return Ok(());
    }

    if interactive {
        let banner: Vec<OutputLine> = shell.output().iter().cloned().collect();
        for line in &banner {
            printer.print_line(&mut out, line)?;
        }
    }
    repl(&mut shell, &printer, interactive, &mut out)
}

fn repl(
    shell: &mut TerminalShell,
    printer: &Printer,
    interactive: bool,
    out: &mut impl Write,
) -> Result<()> {
    let stdin = io::stdin();
    let mut pending = String::new();
    loop {
        if interactive {
            write!(out, "{}{pending}", shell.prompt())?;
            out.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = format!("{pending}{}", line.trim_end_matches(['\n', '\r']));
        pending.clear();

        if let Some(partial) = line.strip_suffix('\t') {
            let outcome = shell.handle_key(Key::Tab, partial);
            printer.print(out, &outcome.rendered)?;
            pending = match outcome.input {
                InputEdit::Replace(completed) => completed,
                InputEdit::Keep => partial.to_string(),
            };
            continue;
        }

        if matches!(line.trim(), "exit" | "logout") {
            break;
        }
        printer.print(out, &shell.submit(&line))?;
    }
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

struct Printer {
    color: bool,
    /// Print command echoes; off when the user just typed the line.
    echo: bool,
}

impl Printer {
    fn print(&self, out: &mut impl Write, rendered: &Rendered) -> io::Result<()> {
        if rendered.cleared && self.color {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        for line in &rendered.lines {
            if line.style() == LineStyle::Command && !self.echo {
                continue;
            }
            self.print_line(out, line)?;
        }
        Ok(())
    }

    fn print_line(&self, out: &mut impl Write, line: &OutputLine) -> io::Result<()> {
        let text = line.content();
        if !self.color {
            return writeln!(out, "{text}");
        }
        let code = match line.style() {
            LineStyle::Command => "1",
            LineStyle::Output => "0",
            LineStyle::Error => "31",
            LineStyle::Info => "33",
        };
        writeln!(out, "\x1b[{code}m{text}\x1b[0m")
    }
}
