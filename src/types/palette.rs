//! Palette type for letter-named colour collections.

use super::Colour;

/// Maximum number of colours in a palette, one per letter of the alphabet.
pub const MAX_COLOURS: usize = 26;

/// Index of a colour within a [`Palette`].
pub type ColourIndex = u8;

/// A colour and the letter that names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Lowercase ASCII letter.
    pub letter: char,
    pub colour: Colour,
}

/// An ordered collection of letter-named colours.
///
/// Entries keep their declaration order, which is also the order they are
/// written to image palettes. Letters may repeat; lookups return the first
/// entry with a matching letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a colour, returning its index.
    ///
    /// The letter is folded to lowercase. Returns `None` once the palette
    /// already holds [`MAX_COLOURS`] entries.
    pub fn insert(&mut self, letter: char, colour: Colour) -> Option<ColourIndex> {
        if self.is_full() {
            return None;
        }
        let index = self.entries.len() as ColourIndex;
        self.entries.push(PaletteEntry {
            letter: letter.to_ascii_lowercase(),
            colour,
        });
        Some(index)
    }

    /// Find the index of the first colour named by `letter` (case-insensitive).
    pub fn find(&self, letter: char) -> Option<ColourIndex> {
        let letter = letter.to_ascii_lowercase();
        self.entries
            .iter()
            .position(|e| e.letter == letter)
            .map(|i| i as ColourIndex)
    }

    /// Get an entry by index.
    pub fn get(&self, index: ColourIndex) -> Option<&PaletteEntry> {
        self.entries.get(index as usize)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if no more colours can be added.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_COLOURS
    }
}
