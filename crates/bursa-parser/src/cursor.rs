//! Character cursor with 1-based line/column tracking.
//!
//! Modeled on the hand-rolled scanner pattern used for plain-text ledger
//! grammars elsewhere in the ecosystem (a `current()`/`advance()` cursor
//! driving a line-by-line dispatcher), fused directly with the parser
//! rather than staged behind a separate token stream.

use bursa_core::{Position, Span};

/// A single-pass, backtracking-free cursor over source text.
///
/// `\r` is treated as horizontal whitespace rather than as part of the
/// line terminator, so CRLF input is accepted without special-casing.
pub struct Cursor {
    chars: Vec<char>,
    idx: usize,
    line: u32,
    col: u32,
}

impl Cursor {
    /// Create a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            idx: 0,
            line: 1,
            col: 1,
        }
    }

    /// The character at the cursor, or `'\0'` at end of input.
    #[must_use]
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// The character `offset` positions ahead of the cursor, or `'\0'`
    /// past the end of input.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> char {
        self.chars.get(self.idx + offset).copied().unwrap_or('\0')
    }

    /// Whether the cursor has consumed all input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.idx >= self.chars.len()
    }

    /// The cursor's current position.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Snapshot the current position, to later pair with [`Self::span_from`].
    #[must_use]
    pub fn mark_start(&self) -> Position {
        self.position()
    }

    /// Build a span from `start` to the cursor's current position.
    #[must_use]
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.position())
    }

    /// Consume and return one character, advancing line/column
    /// bookkeeping. A no-op returning `'\0'` at end of input.
    pub fn advance(&mut self) -> char {
        let c = self.peek();
        if c == '\0' && self.is_eof() {
            return c;
        }
        self.idx += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        c
    }

    /// Consume spaces, tabs, and `\r`, never a `\n`.
    pub fn skip_horizontal_whitespace(&mut self) {
        while matches!(self.peek(), ' ' | '\t' | '\r') {
            self.advance();
        }
    }

    /// Advance up to, but not past, the next `\n` (or end of input).
    pub fn skip_to_eol(&mut self) {
        while !self.is_eof() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Advance past the next `\n`, or to end of input if there is none.
    pub fn skip_line(&mut self) {
        self.skip_to_eol();
        if self.peek() == '\n' {
            self.advance();
        }
    }

    /// Consume any run of lines whose only content is horizontal
    /// whitespace.
    pub fn skip_blank_lines(&mut self) {
        loop {
            self.skip_horizontal_whitespace();
            if self.peek() == '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut c = Cursor::new("ab\ncd");
        assert_eq!(c.position(), Position::new(1, 1));
        c.advance();
        assert_eq!(c.position(), Position::new(1, 2));
        c.advance();
        assert_eq!(c.position(), Position::new(1, 3));
        c.advance(); // consumes '\n'
        assert_eq!(c.position(), Position::new(2, 1));
    }

    #[test]
    fn peek_returns_null_char_at_eof() {
        let c = Cursor::new("");
        assert_eq!(c.peek(), '\0');
        assert!(c.is_eof());
    }

    #[test]
    fn skip_horizontal_whitespace_stops_at_newline() {
        let mut c = Cursor::new("  \t x");
        c.skip_horizontal_whitespace();
        assert_eq!(c.peek(), 'x');
    }

    #[test]
    fn skip_blank_lines_consumes_only_whitespace_lines() {
        let mut c = Cursor::new("\n  \n\tx");
        c.skip_blank_lines();
        assert_eq!(c.position(), Position::new(3, 2));
        assert_eq!(c.peek(), 'x');
    }

    #[test]
    fn skip_line_advances_past_newline() {
        let mut c = Cursor::new("abc\ndef");
        c.skip_line();
        assert_eq!(c.peek(), 'd');
    }

    #[test]
    fn skip_line_at_eof_without_trailing_newline() {
        let mut c = Cursor::new("abc");
        c.skip_line();
        assert!(c.is_eof());
    }

    #[test]
    fn span_from_covers_consumed_range() {
        let mut c = Cursor::new("abc");
        let start = c.mark_start();
        c.advance();
        c.advance();
        let span = c.span_from(start);
        assert_eq!(span.start, Position::new(1, 1));
        assert_eq!(span.end, Position::new(1, 3));
    }
}
