#![forbid(unsafe_code)]

//! Forward/backward cursor over a borrowed token slice

/// Cursor over an ordered sequence of string tokens
///
/// The position may sit one past the last token, in which case the cursor is
/// no longer valid and [`TokenCursor::current`] returns an empty string.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a, S: AsRef<str>> {
    tokens: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> TokenCursor<'a, S> {
    /// Creates a cursor positioned on the first token
    pub fn new(tokens: &'a [S]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// Token at the current position, or `""` past the end
    pub fn current(&self) -> &'a str {
        self.at(self.position)
    }

    /// Token after the current one, without moving
    pub fn peek_next(&self) -> &'a str {
        self.at(self.position + 1)
    }

    /// Token before the current one, without moving
    pub fn peek_previous(&self) -> &'a str {
        match self.position.checked_sub(1) {
            Some(index) => self.at(index),
            None => "",
        }
    }

    /// Moves one token forward; stops one past the last token
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Moves one token back; stops at the first token
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Moves back to the first token
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn is_valid(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Zero-based index of the current position
    pub fn key(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn at(&self, index: usize) -> &'a str {
        self.tokens.get(index).map(AsRef::as_ref).unwrap_or("")
    }
}
