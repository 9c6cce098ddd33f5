//! Types produced by parsing a tartan definition file.

use crate::types::{Colour, ColourIndex, Palette, Weave};

/// A colour definition line as it appeared in the source.
///
/// Kept alongside the palette so validation can point back at the
/// defining line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourDef {
    /// Index of the entry this line created in the palette.
    pub index: ColourIndex,
    /// Lowercase letter naming the colour.
    pub letter: char,
    pub colour: Colour,
    /// Number of hex digits written after `#`.
    pub digits: usize,
    /// Line number (1-indexed).
    pub line: u32,
}

/// A fully parsed tartan definition: its colours and its weave.
#[derive(Debug, Clone)]
pub struct Tartan {
    pub palette: Palette,
    pub weave: Weave,
    /// One entry per colour line, in palette order.
    pub colour_defs: Vec<ColourDef>,
}

impl Tartan {
    /// Check whether the palette entry at `index` is used by any thread.
    pub fn uses(&self, index: ColourIndex) -> bool {
        self.weave.colours().any(|c| c == index)
    }
}
