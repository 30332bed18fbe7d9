//! Tokenizer for submitted command lines.
//!
//! Handles:
//! - Whitespace-separated words
//! - Single quotes (taken literally)
//! - Double quotes (with `\"` and `\\` escapes)
//!
//! A quote opened mid-word continues the same word, so `my"  "notes` is
//! one token. An unclosed quote runs to the end of the line.

/// Lexer over a single input line.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Collect every word of the line.
    pub fn tokenize(self) -> Vec<String> {
        self.collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.current_char() {
            match c {
                c if c.is_whitespace() => break,
                '\'' => self.read_single_quoted(&mut word),
                '"' => self.read_double_quoted(&mut word),
                _ => {
                    word.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        word
    }

    fn read_single_quoted(&mut self, word: &mut String) {
        self.pos += 1; // skip opening '
        let start = self.pos;
        match self.input[start..].find('\'') {
            Some(len) => {
                word.push_str(&self.input[start..start + len]);
                self.pos = start + len + 1;
            }
            None => {
                word.push_str(&self.input[start..]);
                self.pos = self.input.len();
            }
        }
    }

    fn read_double_quoted(&mut self, word: &mut String) {
        self.pos += 1; // skip opening "
        while let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
            match c {
                '"' => return,
                '\\' => match self.current_char() {
                    Some(escaped @ ('"' | '\\')) => {
                        word.push(escaped);
                        self.pos += 1;
                    }
                    _ => word.push('\\'),
                },
                _ => word.push(c),
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        Some(self.read_word())
    }
}

/// Split a command line into words.
pub fn tokenize(line: &str) -> Vec<String> {
    Lexer::new(line).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_command() {
        assert_eq!(tokenize("ls"), vec!["ls"]);
    }

    #[test]
    fn test_command_with_args() {
        assert_eq!(tokenize("  ls   -la  /Users "), vec!["ls", "-la", "/Users"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(tokenize("mkdir 'my notes'"), vec!["mkdir", "my notes"]);
    }

    #[test]
    fn test_double_quotes_with_escape() {
        assert_eq!(
            tokenize(r#"touch "say \"hi\".txt""#),
            vec!["touch", r#"say "hi".txt"#]
        );
    }

    #[test]
    fn test_quote_inside_word() {
        assert_eq!(tokenize("cat my' 'file.txt"), vec!["cat", "my file.txt"]);
    }

    #[test]
    fn test_unclosed_quote_runs_to_end() {
        assert_eq!(tokenize("cat 'open quote"), vec!["cat", "open quote"]);
        assert_eq!(tokenize("cat \"open"), vec!["cat", "open"]);
    }

    #[test]
    fn test_empty_quotes_yield_empty_word() {
        assert_eq!(tokenize("touch ''"), vec!["touch", ""]);
    }

    #[test]
    fn test_lexer_iterator_take() {
        let first_two: Vec<_> = Lexer::new("a b c d").take(2).collect();
        assert_eq!(first_two, vec!["a", "b"]);
    }
}
