//! Parser for tartan definition (`.tdf`) files.
//!
//! A definition file is read line by line. Each line is classified by its
//! first character:
//! - `#` starts a colour definition (`#ffc800 y`)
//! - any other printable, non-blank character starts a pattern line
//!   (`r6(g10b10)k1`)
//! - anything else (blank or whitespace-led lines) is ignored
//!
//! The first pattern line is the warp, an optional second one the weft.
//!
//! # Usage
//!
//! ```ignore
//! use mktartan::parser::parse_tartan;
//!
//! let source = std::fs::read_to_string("mar.tdf")?;
//! let tartan = parse_tartan(&source, 1)?;
//!
//! println!("{} warp threads", tartan.weave.warp().len());
//! ```

mod colour;
mod pattern;
pub mod span;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, TartanError};
use crate::types::{Palette, WeaveBuilder};

// Re-export main entry points
pub use colour::parse_colour_line;
pub use pattern::parse_pattern_line;
pub use span::Location;
pub use types::{ColourDef, Tartan};

/// What a line of a definition file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Colour,
    Pattern,
    Blank,
}

/// Classify a line by its first character.
pub fn classify_line(line: &str) -> LineKind {
    match line.chars().next() {
        Some('#') => LineKind::Colour,
        Some(c) if c.is_ascii_graphic() => LineKind::Pattern,
        _ => LineKind::Blank,
    }
}

/// Parse a whole tartan definition.
///
/// Thread counts in every pattern line are multiplied by `scale`. Colour
/// lines may appear anywhere, but a colour has to be defined above the
/// first pattern line that uses it.
pub fn parse_tartan(source: &str, scale: u32) -> Result<Tartan> {
    let mut palette = Palette::new();
    let mut colour_defs = Vec::new();
    let mut weave = WeaveBuilder::new();

    for (i, line) in source.lines().enumerate() {
        let line_no = i as u32 + 1;
        match classify_line(line) {
            LineKind::Colour => {
                colour_defs.push(parse_colour_line(line, line_no, &mut palette)?);
            }
            LineKind::Pattern => {
                weave.check_room(line_no)?;
                let threads = parse_pattern_line(line, line_no, &palette, scale)?;
                weave.push(threads, line_no)?;
            }
            LineKind::Blank => {}
        }
    }

    Ok(Tartan {
        palette,
        weave: weave.build()?,
        colour_defs,
    })
}

/// Read and parse a tartan definition file.
pub fn load_tartan(path: &Path, scale: u32) -> Result<Tartan> {
    let source = fs::read_to_string(path).map_err(|e| TartanError::CannotOpenFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_tartan(&source, scale)
}
