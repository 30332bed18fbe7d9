//! Terminal output types.

use std::collections::VecDeque;

/// Style class a host applies to a rendered line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// Echo of a submitted command line
    Command,
    /// Normal command output
    Output,
    /// Failure text
    Error,
    /// Banner and notice text
    Info,
}

impl LineStyle {
    /// CSS-style class name for the host.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Output => "output",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A single rendered line with an ID unique within its [`OutputLog`].
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Key for efficient list rendering; assigned by [`OutputLog::push`].
    pub id: usize,
    pub data: OutputLineData,
}

/// The content of an output line.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Prompt followed by the submitted input
    Command { prompt: String, input: String },
    Text(String),
    Error(String),
    Info(String),
    Empty,
}

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self { id: 0, data }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// Style class for this line. Empty lines render as output.
    pub fn style(&self) -> LineStyle {
        match self.data {
            OutputLineData::Command { .. } => LineStyle::Command,
            OutputLineData::Text(_) | OutputLineData::Empty => LineStyle::Output,
            OutputLineData::Error(_) => LineStyle::Error,
            OutputLineData::Info(_) => LineStyle::Info,
        }
    }

    /// Plain text of the line as a host renders it.
    pub fn content(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => format!("{prompt}{input}"),
            OutputLineData::Text(s) | OutputLineData::Error(s) | OutputLineData::Info(s) => {
                s.clone()
            }
            OutputLineData::Empty => String::new(),
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are render keys, not content
        self.data == other.data
    }
}

// ============================================================================
// OutputLog
// ============================================================================

/// Bounded, ordered log of rendered lines.
///
/// Pushing past capacity drops the oldest line. IDs keep increasing across
/// [`clear`](Self::clear) so a host never sees a key reused.
#[derive(Clone, Debug)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    capacity: usize,
    next_id: usize,
}

impl OutputLog {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "OutputLog capacity must be greater than 0");
        Self {
            lines: VecDeque::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Append a line, assigning its ID, and return the stored copy.
    pub fn push(&mut self, mut line: OutputLine) -> &OutputLine {
        line.id = self.next_id;
        self.next_id += 1;
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
        &self.lines[self.lines.len() - 1]
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OutputLine> + ExactSizeIterator {
        self.lines.iter()
    }
}
