//! Reactive wrapper around one [`TerminalShell`].

use dhterm_core::{InputEdit, Key, OutputLine, Rendered, ShellConfig, TerminalShell};
use leptos::prelude::*;

/// Signals for a single mounted terminal.
///
/// The shell itself lives in a signal so the struct stays `Copy`; the
/// rendered lines and prompt are mirrored into their own signals for the
/// view to track.
#[derive(Clone, Copy)]
pub struct TerminalState {
    shell: RwSignal<TerminalShell>,
    /// Lines currently shown, oldest first.
    pub lines: RwSignal<Vec<OutputLine>>,
    pub prompt: RwSignal<String>,
    max_lines: usize,
}

impl TerminalState {
    pub fn new(config: ShellConfig) -> Self {
        let max_lines = config.max_output_lines.max(1);
        let shell = TerminalShell::new(config);
        let lines = shell.output().iter().cloned().collect();
        let prompt = shell.prompt();
        Self {
            shell: RwSignal::new(shell),
            lines: RwSignal::new(lines),
            prompt: RwSignal::new(prompt),
            max_lines,
        }
    }

    /// Forward a key press; returns what to do with the input field.
    pub fn key(&self, key: Key, line: &str) -> InputEdit {
        let Some(outcome) = self.shell.try_update(|sh| sh.handle_key(key, line)) else {
            return InputEdit::Keep;
        };
        self.apply(outcome.rendered);
        outcome.input
    }

    pub fn hint(&self, line: &str) -> Option<String> {
        self.shell.with_untracked(|sh| sh.hint(line))
    }

    pub fn clear(&self) {
        if let Some(rendered) = self.shell.try_update(TerminalShell::clear_output) {
            self.apply(rendered);
        }
    }

    pub fn reset(&self) {
        if let Some(rendered) = self.shell.try_update(TerminalShell::reset) {
            self.apply(rendered);
        }
    }

    fn apply(&self, rendered: Rendered) {
        let max_lines = self.max_lines;
        self.lines.update(|lines| {
            if rendered.cleared {
                lines.clear();
            }
            lines.extend(rendered.lines);
            if lines.len() > max_lines {
                lines.drain(..lines.len() - max_lines);
            }
        });
        self.prompt
            .set(self.shell.with_untracked(TerminalShell::prompt));
    }
}
