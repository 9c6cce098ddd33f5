//! XPM output for rendered weaves.
//!
//! Writes an XPM pixmap: a C array of strings holding the size
//! header, one line per palette colour and one string per pixel row. Each
//! pixel is written as its colour letter.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TartanError};
use crate::types::Palette;

use super::RenderedWeave;

/// Extension of XPM output files.
pub const XPM_EXTENSION: &str = "xpm";

/// Encode a rendered weave as XPM text.
///
/// `name` becomes the C array identifier, `<name>_xpm`.
pub fn encode_xpm<W: Write>(
    name: &str,
    palette: &Palette,
    rendered: &RenderedWeave,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "/* XPM */")?;
    writeln!(out, "static char *{}_xpm[] =", name)?;
    writeln!(out, "  {{")?;
    writeln!(
        out,
        "  \"{} {} {} 1\",",
        rendered.width(),
        rendered.height(),
        palette.len()
    )?;
    writeln!(out)?;

    for entry in palette.entries() {
        writeln!(out, "  \"{} c {}\",", entry.letter, entry.colour)?;
    }
    writeln!(out)?;

    let last = rendered.height().saturating_sub(1);
    for (y, row) in rendered.rows().enumerate() {
        // Every index comes from the palette the weave was parsed against
        let letters: String = row
            .iter()
            .map(|&i| palette.entries()[usize::from(i)].letter)
            .collect();
        let separator = if y < last { "," } else { "" };
        writeln!(out, "  \"{}\"{}", letters, separator)?;
    }

    writeln!(out, "  }};")?;
    Ok(())
}

/// Write a rendered weave to an XPM file.
///
/// The array is named after the file stem.
pub fn write_xpm(palette: &Palette, rendered: &RenderedWeave, path: &Path) -> Result<()> {
    let to_error = |source: io::Error| TartanError::CannotWriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    encode_xpm(&xpm_name(path), palette, rendered, &mut out).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    Ok(())
}

/// A C identifier derived from the file stem of `path`.
pub fn xpm_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
