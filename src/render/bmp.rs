//! BMP output for rendered weaves.
//!
//! Writes an 8-bit palettised Windows bitmap. Every header field is
//! serialised explicitly as little-endian. Pixel rows are written in
//! sampling order (`y = 0` first) with one index byte per pixel and no
//! row padding.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TartanError};
use crate::types::Palette;

use super::RenderedWeave;

/// Extension of BMP output files.
pub const BMP_EXTENSION: &str = "bmp";

/// `BM` file signature.
const SIGNATURE: [u8; 2] = *b"BM";
const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PALETTE_ENTRY_SIZE: u32 = 4;
const BITS_PER_PIXEL: u16 = 8;
/// Uncompressed (`BI_RGB`).
const COMPRESSION_NONE: u32 = 0;

fn too_large(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{what} too large for a bitmap"),
    )
}

/// Encode a rendered weave as BMP bytes.
pub fn encode_bmp<W: Write>(
    palette: &Palette,
    rendered: &RenderedWeave,
    out: &mut W,
) -> io::Result<()> {
    let width = u32::try_from(rendered.width()).map_err(|_| too_large("width"))?;
    let height = u32::try_from(rendered.height()).map_err(|_| too_large("height"))?;
    let colours = palette.len() as u32;

    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE + colours * PALETTE_ENTRY_SIZE;
    let image_size = width
        .checked_mul(height)
        .ok_or_else(|| too_large("image"))?;
    let file_size = data_offset
        .checked_add(image_size)
        .ok_or_else(|| too_large("image"))?;

    // File header
    out.write_all(&SIGNATURE)?;
    out.write_all(&file_size.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&data_offset.to_le_bytes())?;

    // Info header
    out.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    out.write_all(&width.to_le_bytes())?;
    out.write_all(&height.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?;
    out.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
    out.write_all(&COMPRESSION_NONE.to_le_bytes())?;
    out.write_all(&image_size.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&colours.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;

    for entry in palette.entries() {
        out.write_all(&entry.colour.to_bgr0())?;
    }

    out.write_all(rendered.pixels())?;
    Ok(())
}

/// Write a rendered weave to a BMP file.
pub fn write_bmp(palette: &Palette, rendered: &RenderedWeave, path: &Path) -> Result<()> {
    let to_error = |source: io::Error| TartanError::CannotWriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    encode_bmp(palette, rendered, &mut out).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    Ok(())
}
