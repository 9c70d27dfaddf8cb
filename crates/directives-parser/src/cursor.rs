/// A cursor over source text that tracks position.
///
/// Provides low-level character access with peek/advance semantics.
/// Tracks byte offset, line number, and column number as it advances.
pub struct Cursor<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// Remaining source text (slice starting at current position).
    rest: &'src str,
    /// Current byte offset from start of source.
    offset: u32,
    /// Current line number (1-indexed).
    line: u32,
    /// Current column number (1-indexed, byte-based).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the source.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset from start of source.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Current line number (1-indexed).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-indexed, byte-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Check if we've reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Peek at the current character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let first = *self.rest.as_bytes().first()?;
        if first < 128 {
            Some(first as char)
        } else {
            self.rest.chars().next()
        }
    }

    /// Check if the current character satisfies a predicate.
    #[inline]
    pub fn check(&self, f: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(f)
    }

    /// Check if the upcoming bytes match the given string.
    #[inline]
    pub fn check_str(&self, s: &str) -> bool {
        self.rest.starts_with(s)
    }

    /// Consume the current character and advance.
    ///
    /// Returns the consumed character, or `None` if at EOF.
    /// Updates line/column tracking.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        let len = ch.len_utf8();

        self.rest = &self.rest[len..];
        self.offset += len as u32;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += len as u32;
        }

        Some(ch)
    }

    /// Consume if the current character matches.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the given string if the upcoming bytes match it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.check_str(s) {
            for _ in s.chars() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// Consume characters while the predicate matches.
    ///
    /// Returns the consumed slice.
    pub fn eat_while(&mut self, f: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset as usize;
        while self.check(&f) {
            self.advance();
        }
        &self.source[start..self.offset as usize]
    }

    /// Get a slice of source from a starting offset to current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'src str {
        &self.source[start as usize..self.offset as usize]
    }

    /// Remaining unconsumed source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        self.rest
    }
}

pub use directives_core::{is_ident_continue, is_ident_start};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(cursor.peek(), Some('h'));
        assert_eq!(cursor.offset(), 0);

        assert_eq!(cursor.advance(), Some('h'));
        assert_eq!(cursor.peek(), Some('e'));
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn cursor_eat() {
        let mut cursor = Cursor::new("=> x");

        assert!(!cursor.eat('>'));
        assert!(cursor.eat_str("=>"));
        assert_eq!(cursor.rest(), " x");
    }

    #[test]
    fn cursor_eat_while() {
        let mut cursor = Cursor::new("name =>");

        let ident = cursor.eat_while(is_ident_continue);
        assert_eq!(ident, "name");

        cursor.eat_while(char::is_whitespace);
        assert!(cursor.check_str("=>"));
    }

    #[test]
    fn cursor_utf8() {
        let mut cursor = Cursor::new("héllo");

        cursor.advance(); // h (1 byte)
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.column(), 2);

        cursor.advance(); // é (2 bytes)
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.column(), 4); // Column counts bytes
        assert_eq!(cursor.slice_from(0), "hé");
    }

    #[test]
    fn cursor_line_and_column() {
        let mut cursor = Cursor::new("a\nb");

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        assert!(!cursor.is_eof());

        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn is_ident() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('0'));
        assert!(!is_ident_start('$'));

        assert!(is_ident_continue('0'));
        assert!(!is_ident_continue('-'));
    }
}
