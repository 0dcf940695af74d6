//! Tokenization for placeholder markers
//!
//! Finds every `open \s* identifier \s* close` marker with a small forward
//! state machine. Delimiters are arbitrary byte strings taken from the
//! [`PlaceholderSyntax`](crate::syntax::PlaceholderSyntax).

use crate::syntax::{is_ident_byte, PlaceholderSyntax};

/// A single well-formed placeholder marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// Identifier between the delimiters, surrounding whitespace removed
    pub ident: &'a str,
    /// Absolute byte position of the opening delimiter
    pub start: usize,
    /// Total length in bytes including both delimiters
    pub length: usize,
    /// Line number where the marker starts (for diagnostics)
    pub line: usize,
}

impl Token<'_> {
    /// Byte position just past the closing delimiter
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Tokenization state machine
///
/// ```text
/// Normal ──open──> InToken ──close──> [Yield Token] → Normal
///                     │
///                     ├──open──> InToken (restart at the inner delimiter)
///                     └──other byte / EOF──> Normal at start + 1
/// ```
///
/// Token content may only hold identifier bytes and ASCII whitespace, so
/// abandoning a marker rescans at most the marker itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Regular text
    Normal,

    /// Inside `open ...`, looking for `close`
    InToken {
        /// Byte position of the opening delimiter
        start: usize,
        /// Byte position where token content starts
        content_start: usize,
        /// Line of the opening delimiter
        line: usize,
    },
}

/// Iterator over placeholder markers in a template
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    bytes: &'a [u8],
    open: &'a [u8],
    close: &'a [u8],
    pos: usize,
    state: ScanState,
    line: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str, syntax: &'a PlaceholderSyntax) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            open: syntax.open.as_bytes(),
            close: syntax.close.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
            line: 1,
        }
    }

    #[inline]
    fn at(&self, delimiter: &[u8]) -> bool {
        !delimiter.is_empty() && self.bytes[self.pos..].starts_with(delimiter)
    }

    fn process_normal(&mut self, byte: u8) {
        if self.at(self.open) {
            self.enter_token();
        } else {
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn enter_token(&mut self) {
        self.state = ScanState::InToken {
            start: self.pos,
            content_start: self.pos + self.open.len(),
            line: self.line,
        };
        self.pos += self.open.len();
    }

    /// Give up on the current marker and resume right after its first byte
    fn abandon(&mut self, start: usize, line: usize) {
        tracing::debug!(line, "ignoring malformed placeholder marker");
        self.state = ScanState::Normal;
        self.pos = start + 1;
        self.line = line;
    }

    fn process_in_token(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        line: usize,
    ) -> Option<Token<'a>> {
        if self.at(self.close) {
            let ident = self.text[content_start..self.pos]
                .trim_matches(|c: char| c.is_ascii_whitespace());
            if ident.is_empty() || !ident.bytes().all(is_ident_byte) {
                self.abandon(start, line);
                return None;
            }

            self.pos += self.close.len();
            self.state = ScanState::Normal;
            return Some(Token {
                ident,
                start,
                length: self.pos - start,
                line,
            });
        }

        if self.at(self.open) {
            self.enter_token();
        } else if is_ident_byte(byte) || byte.is_ascii_whitespace() {
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        } else {
            self.abandon(start, line);
        }
        None
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if self.pos >= self.bytes.len() {
                match self.state {
                    ScanState::Normal => return None,
                    // Unclosed marker at end of input
                    ScanState::InToken { start, line, .. } => {
                        self.abandon(start, line);
                        continue;
                    }
                }
            }

            let byte = self.bytes[self.pos];
            match self.state {
                ScanState::Normal => self.process_normal(byte),
                ScanState::InToken {
                    start,
                    content_start,
                    line,
                } => {
                    if let Some(token) = self.process_in_token(byte, start, content_start, line) {
                        return Some(token);
                    }
                }
            }
        }
    }
}
