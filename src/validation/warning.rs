//! Warning types produced by the tartan checks.

use std::fmt;

/// What a validation warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A letter defined on more than one colour line.
    DuplicateColour,
    /// A colour value that is not written as six hex digits.
    ColourDigits,
    /// A colour that no warp or weft thread uses.
    UnusedColour,
}

impl WarningKind {
    /// Machine-readable code, shown after the message.
    pub fn code(self) -> &'static str {
        match self {
            WarningKind::DuplicateColour => "mktartan::validate::duplicate-colour",
            WarningKind::ColourDigits => "mktartan::validate::colour-digits",
            WarningKind::UnusedColour => "mktartan::validate::unused-colour",
        }
    }

    /// Suggested fix, if there is a single obvious one.
    pub fn help(self) -> Option<&'static str> {
        match self {
            WarningKind::DuplicateColour => {
                Some("The first definition is used; give this colour another letter")
            }
            WarningKind::ColourDigits => Some("Write colours as #rrggbb"),
            WarningKind::UnusedColour => None,
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A warning about one colour definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: WarningKind,
    /// Line of the colour definition the warning is about (1-indexed).
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: WarningKind, line: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn help(&self) -> Option<&'static str> {
        self.kind.help()
    }
}

/// Warnings collected from every check, kept in source line order.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning, keeping the list ordered by line.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let at = self
            .diagnostics
            .partition_point(|d| d.line <= diagnostic.line);
        self.diagnostics.insert(at, diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        for diagnostic in other.diagnostics {
            self.push(diagnostic);
        }
    }

    /// Count the warnings of one kind.
    pub fn count(&self, kind: WarningKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
