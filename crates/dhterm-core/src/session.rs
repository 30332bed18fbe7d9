//! Per-terminal session state: working directory and command history.

use std::collections::VecDeque;

use crate::models::VirtualPath;

/// Working directory plus command history with a recall cursor.
///
/// The cursor ranges over `0..=history.len()`; `history.len()` is the
/// "blank line" position, i.e. the not-yet-submitted entry.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    current_path: VirtualPath,
    history: VecDeque<String>,
    cursor: usize,
    max_history: usize,
}

impl SessionState {
    /// Start a session in `home` with an empty history.
    pub fn new(home: VirtualPath, max_history: usize) -> Self {
        Self {
            current_path: home,
            history: VecDeque::new(),
            cursor: 0,
            max_history: max_history.max(1),
        }
    }

    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    /// Move to `path`. Callers check that it is an existing directory.
    pub(crate) fn change_directory(&mut self, path: VirtualPath) {
        self.current_path = path;
    }

    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a submitted line and park the cursor on the blank line.
    ///
    /// The oldest entry is dropped once the history is full.
    pub fn record_command(&mut self, line: &str) {
        self.history.push_back(line.to_string());
        if self.history.len() > self.max_history {
            self.history.pop_front();
        }
        self.cursor = self.history.len();
    }

    /// Step back one entry, stopping at the oldest.
    ///
    /// Returns `None` only when there is no history at all.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        log::trace!("history cursor -> {}", self.cursor);
        self.history.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry.
    ///
    /// Returns `None` once the cursor reaches the blank line.
    pub fn recall_next(&mut self) -> Option<&str> {
        self.cursor = (self.cursor + 1).min(self.history.len());
        log::trace!("history cursor -> {}", self.cursor);
        self.history.get(self.cursor).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(VirtualPath::normalize("/Users/student"), 100)
    }

    fn session_with(lines: &[&str]) -> SessionState {
        let mut s = session();
        for line in lines {
            s.record_command(line);
        }
        s
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.current_path().as_str(), "/Users/student");
        assert!(s.history().is_empty());
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_record_parks_cursor_past_end() {
        let s = session_with(&["pwd", "ls"]);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_recall_previous() {
        let mut s = session_with(&["pwd", "ls", "cd Documents"]);
        assert_eq!(s.recall_previous(), Some("cd Documents"));
        assert_eq!(s.recall_previous(), Some("ls"));
        assert_eq!(s.recall_previous(), Some("pwd"));
        assert_eq!(s.recall_previous(), Some("pwd"));
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_recall_next_returns_to_blank() {
        let mut s = session_with(&["pwd", "ls"]);
        s.recall_previous();
        s.recall_previous();
        assert_eq!(s.recall_next(), Some("ls"));
        assert_eq!(s.recall_next(), None);
        assert_eq!(s.recall_next(), None);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut s = session();
        assert_eq!(s.recall_previous(), None);
        assert_eq!(s.recall_next(), None);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_record_resets_cursor() {
        let mut s = session_with(&["pwd", "ls"]);
        s.recall_previous();
        s.record_command("help");
        assert_eq!(s.cursor(), 3);
        assert_eq!(s.recall_previous(), Some("help"));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut s = SessionState::new(VirtualPath::root(), 2);
        s.record_command("a");
        s.record_command("b");
        s.record_command("c");
        assert_eq!(*s.history(), vec!["b", "c"]);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn test_full_history_keeps_newest_in_order() {
        let mut s = SessionState::new(VirtualPath::root(), 3);
        for i in 0..50 {
            s.record_command(&format!("echo {i}"));
        }
        assert_eq!(*s.history(), vec!["echo 47", "echo 48", "echo 49"]);
        assert_eq!(s.recall_previous(), Some("echo 49"));
        assert_eq!(s.recall_previous(), Some("echo 48"));
        assert_eq!(s.recall_previous(), Some("echo 47"));
        assert_eq!(s.recall_previous(), Some("echo 47"));
    }
}
