//! Tab completion and ghost-text hints.
//!
//! The word under the cursor is always the last one on the line:
//! - the first word completes against command names
//! - any later word completes against entries of a directory, which is the
//!   working directory unless the word carries a `dir/` prefix
//!
//! Matching is a plain, case-sensitive prefix test. Dotfiles are candidates.

use crate::filesystem::VirtualFs;
use crate::models::VirtualPath;
use crate::path::PathResolver;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Exactly one candidate; the full replacement input line.
    Single(String),
    /// Several candidates, as bare names in listing order.
    Multiple(Vec<String>),
    /// No candidates.
    None,
}

/// What completion looks at: command names plus one shell's filesystem view.
pub struct Completer<'a> {
    pub commands: &'a [&'static str],
    pub fs: &'a VirtualFs,
    pub resolver: &'a PathResolver,
    pub current: &'a VirtualPath,
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Split of a partial path word into the part kept and the part completed.
struct ParsedPath<'a> {
    /// Directory prefix, kept verbatim (e.g. "Documents/" or "").
    dir_part: &'a str,
    /// Entry name being completed.
    name_part: &'a str,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str) -> Self {
        match partial.rfind('/') {
            Some(idx) => Self {
                dir_part: &partial[..=idx],
                name_part: &partial[idx + 1..],
            },
            None => Self {
                dir_part: "",
                name_part: partial,
            },
        }
    }
}

/// The words of an input line with matches for the last one.
struct Completion<'a> {
    head: Vec<&'a str>,
    dir_part: &'a str,
    partial: &'a str,
    matches: Vec<String>,
}

// ============================================================================
// Public API
// ============================================================================

impl Completer<'_> {
    /// Complete `input` on Tab.
    pub fn complete(&self, input: &str) -> AutocompleteResult {
        let Some(completion) = self.collect(input) else {
            return AutocompleteResult::None;
        };

        match completion.matches.len() {
            0 => AutocompleteResult::None,
            1 => {
                let word = format!("{}{}", completion.dir_part, completion.matches[0]);
                let line = if completion.head.is_empty() {
                    word
                } else {
                    format!("{} {word}", completion.head.join(" "))
                };
                AutocompleteResult::Single(line)
            }
            _ => AutocompleteResult::Multiple(completion.matches),
        }
    }

    /// Suffix that would complete the first candidate, for ghost text.
    ///
    /// `None` when nothing would be added.
    pub fn hint(&self, input: &str) -> Option<String> {
        let completion = self.collect(input)?;
        let partial_len = completion.partial.len();
        completion
            .matches
            .into_iter()
            .find(|m| m.len() > partial_len)
            .map(|m| m[partial_len..].to_string())
    }

    fn collect<'i>(&self, input: &'i str) -> Option<Completion<'i>> {
        if input.trim().is_empty() {
            return None;
        }

        let mut words: Vec<&str> = input.split_whitespace().collect();
        if input.ends_with(char::is_whitespace) {
            words.push("");
        }
        let partial = words.pop()?;

        if words.is_empty() {
            let matches = self
                .commands
                .iter()
                .filter(|name| name.starts_with(partial))
                .map(|name| name.to_string())
                .collect();
            return Some(Completion {
                head: words,
                dir_part: "",
                partial,
                matches,
            });
        }

        let parsed = ParsedPath::parse(partial);
        let search_dir = if parsed.dir_part.is_empty() {
            self.current.clone()
        } else {
            self.resolver.resolve(parsed.dir_part, self.current)
        };
        let entries = self.fs.list_children(&search_dir, true).ok()?;
        let matches = entries
            .into_iter()
            .filter(|(name, _)| name.starts_with(parsed.name_part))
            .map(|(name, _)| name.to_string())
            .collect();

        Some(Completion {
            head: words,
            dir_part: parsed.dir_part,
            partial: parsed.name_part,
            matches,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
