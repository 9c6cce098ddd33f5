//! Colour definition line parser.
//!
//! A colour line has the form `#rrggbb l`: a run of hex digits after `#`,
//! optional blanks, and the letter that names the colour in pattern lines.

use crate::error::{Result, TartanError};
use crate::types::{Colour, Palette, MAX_COLOURS};

use super::span::Location;
use super::types::ColourDef;

/// Parse a colour definition line and add the colour to `palette`.
///
/// `line` must start with `#`. The hex run is not required to be six digits
/// long; only its low 24 bits are kept. Anything after the letter is ignored.
pub fn parse_colour_line(line: &str, line_no: u32, palette: &mut Palette) -> Result<ColourDef> {
    let body = line.strip_prefix('#').unwrap_or(line);

    let mut value: u32 = 0;
    let mut digits = 0;
    let mut chars = body.chars().peekable();
    while let Some(d) = chars.next_if(char::is_ascii_hexdigit).and_then(|c| c.to_digit(16)) {
        value = value.wrapping_shl(4) | d;
        digits += 1;
    }

    // Column of the first character after the hex run; `#` is column 1.
    let mut index = 1 + digits;
    while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {
        index += 1;
    }

    let at = Location::at_char(line_no, index);
    let letter = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
        found => return Err(TartanError::InvalidColorLetter { found, at }),
    };

    let colour = Colour::from_value(value);
    let index = palette
        .insert(letter, colour)
        .ok_or(TartanError::PaletteOverflow {
            max: MAX_COLOURS,
            at: Location::new(line_no, 1),
        })?;

    Ok(ColourDef {
        index,
        letter,
        colour,
        digits,
        line: line_no,
    })
}
