//! Character cursor with location tracking.
//!
//! The cursor is `Copy`, so lookahead is a matter of cloning it, scanning,
//! and either keeping the clone or dropping it.

use weft_ir::Location;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    position: usize,
    location: Location,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor {
            source,
            position: 0,
            location: Location::START,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    #[inline]
    pub(crate) fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        self.location
    }

    /// Consume the current character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        self.location = self.location.advance(c);
        Some(c)
    }

    /// Consume the next `length` bytes, which must end on a character
    /// boundary, returning them.
    pub(crate) fn advance(&mut self, length: usize) -> &'src str {
        let end = self.position + length;
        let start = self.position;
        while self.position < end && self.bump().is_some() {}
        &self.source[start..self.position]
    }

    /// Consume characters while `predicate` holds, returning them.
    pub(crate) fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let start = self.position;
        while self.current().is_some_and(&predicate) {
            self.bump();
        }
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests;
