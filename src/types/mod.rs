//! Core domain types for mktartan.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - 24-bit RGB colour values
//! - `Palette` - Letter-named colour collections
//! - `ThreadSequence` / `Weave` - Warp and weft threads of a cloth

mod colour;
mod palette;
mod weave;

pub use colour::Colour;
pub use palette::{ColourIndex, Palette, PaletteEntry, MAX_COLOURS};
pub use weave::{ThreadSequence, Weave, WeaveBuilder, MAX_THREADS};
