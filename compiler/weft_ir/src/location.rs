//! Source locations.

use std::fmt;

/// 1-based line and column of a character in a template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// First character of a template.
    pub const START: Location = Location { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// Location of the character following `c`.
    #[must_use]
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Location {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Location {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
