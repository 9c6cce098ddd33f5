//! Rendering module for mktartan.
//!
//! This module handles sampling a weave into a grid of palette indices
//! and writing that grid out as XPM or BMP.

mod bmp;
mod sampler;
mod xpm;

pub use bmp::{encode_bmp, write_bmp, BMP_EXTENSION};
pub use sampler::{RenderOptions, RenderedWeave, Sampler, MAX_PIXELS};
pub use xpm::{encode_xpm, write_xpm, xpm_name, XPM_EXTENSION};
