//! mktartan - Tartan and tweed image weaver
//!
//! A library for turning tartan definition (`.tdf`) files, which list thread
//! colours and counts, into woven images in XPM and BMP format.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use error::{Result, TartanError};
pub use parser::{load_tartan, parse_tartan, Tartan};
pub use render::{
    encode_bmp, encode_xpm, write_bmp, write_xpm, RenderOptions, RenderedWeave, Sampler,
};
pub use types::{
    Colour, ColourIndex, Palette, PaletteEntry, ThreadSequence, Weave, WeaveBuilder,
};
pub use validation::{validate_tartan, Diagnostic, ValidationResult, WarningKind};
