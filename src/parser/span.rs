//! Source location tracking for error messages.

use std::fmt;

/// A location in a tartan definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Location of the character at `index` (0-indexed, in characters) on `line`.
    pub fn at_char(line: u32, index: usize) -> Self {
        Self::new(line, index as u32 + 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Location::new(3, 7).to_string(), "3:7");
    }

    #[test]
    fn test_at_char() {
        assert_eq!(Location::at_char(2, 0), Location::new(2, 1));
        assert_eq!(Location::at_char(2, 4), Location::new(2, 5));
    }
}
