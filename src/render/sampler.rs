//! Weave sampler - maps image coordinates to thread colours.
//!
//! Two weaves are simulated:
//!
//! - **Plain**: warp and weft cross at right angles, passing over and under
//!   each other every `pixel_size` pixels along the `x + y` diagonal. Each
//!   thread is `pixel_size` pixels wide.
//! - **Diagonal** (cross): a twill seen at 45 degrees. Odd columns show the
//!   weft, projected along `x + y`; even columns show the warp, projected
//!   along `y - x`. Threads are one pixel wide.

use crate::error::{Result, TartanError};
use crate::types::{ColourIndex, ThreadSequence, Weave};

/// Most pixels a rendered image may hold (8192 x 8192).
pub const MAX_PIXELS: usize = 1 << 26;

/// Options that control how a weave is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Multiplier applied to every thread count while parsing.
    pub scale: u32,
    /// Render the diagonal (cross) weave instead of the plain one.
    pub diagonal: bool,
}

impl RenderOptions {
    /// Build options, picking the default scale for the weave when none
    /// is given: 2 for the diagonal weave, 1 otherwise.
    pub fn new(scale: Option<u32>, diagonal: bool) -> Self {
        let default_scale = if diagonal { 2 } else { 1 };
        Self {
            scale: scale.unwrap_or(default_scale),
            diagonal,
        }
    }

    /// Width in pixels of one over/under step of the weave.
    pub fn pixel_size(&self) -> usize {
        if self.diagonal {
            1
        } else {
            2
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(None, false)
    }
}

/// Computes the colour of any pixel of a woven image.
///
/// Sampling is a pure function of the coordinates, so pixels may be
/// requested in any order. Coordinates past the image edge wrap around,
/// tiling the cloth.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    weave: &'a Weave,
    pixel_size: usize,
    diagonal: bool,
}

impl<'a> Sampler<'a> {
    pub fn new(weave: &'a Weave, options: &RenderOptions) -> Self {
        Self {
            weave,
            pixel_size: options.pixel_size(),
            diagonal: options.diagonal,
        }
    }

    /// Image width: one column group per warp thread.
    pub fn width(&self) -> usize {
        self.weave.warp().len() * self.pixel_size
    }

    /// Image height: one row group per weft thread.
    pub fn height(&self) -> usize {
        self.weave.weft().len() * self.pixel_size
    }

    /// Palette index of the pixel at `(x, y)`.
    pub fn colour_at(&self, x: usize, y: usize) -> ColourIndex {
        let warp = self.weave.warp();
        let weft = self.weave.weft();

        if self.diagonal {
            if x % 2 == 1 {
                thread(weft, (x + y) % weft.len())
            } else {
                let offset = (y as i64 - x as i64).rem_euclid(warp.len() as i64);
                thread(warp, offset as usize)
            }
        } else {
            let size = self.pixel_size;
            if ((x + y) / size) % 2 == 1 {
                thread(warp, (x / size) % warp.len())
            } else {
                thread(weft, (y / size) % weft.len())
            }
        }
    }

    /// Sample every pixel into a grid.
    ///
    /// Fails without allocating when the image would exceed [`MAX_PIXELS`].
    pub fn render(&self) -> Result<RenderedWeave> {
        let (width, height) = (self.width(), self.height());
        let size = width
            .checked_mul(height)
            .filter(|&n| n <= MAX_PIXELS)
            .ok_or(TartanError::ImageTooLarge {
                width,
                height,
                max: MAX_PIXELS,
            })?;

        let mut pixels = Vec::with_capacity(size);
        for y in 0..height {
            pixels.extend((0..width).map(|x| self.colour_at(x, y)));
        }
        Ok(RenderedWeave::new(width, height, pixels))
    }
}

/// Thread colour at an index already reduced modulo the sequence length.
fn thread(sequence: &ThreadSequence, index: usize) -> ColourIndex {
    sequence.as_slice()[index]
}

/// A rendered weave - a grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWeave {
    width: usize,
    height: usize,
    /// Row-major, top row (`y = 0`) first.
    pixels: Vec<ColourIndex>,
}

impl RenderedWeave {
    /// Create a rendered weave from row-major pixels.
    ///
    /// `pixels` must hold exactly `width * height` entries.
    pub fn new(width: usize, height: usize, pixels: Vec<ColourIndex>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<ColourIndex> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColourIndex]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[ColourIndex] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeaveBuilder;

    fn weave(warp: Vec<ColourIndex>, weft: Vec<ColourIndex>) -> Weave {
        let mut builder = WeaveBuilder::new();
        builder.push(warp.into(), 1).unwrap();
        builder.push(weft.into(), 2).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_options_default_scale() {
        assert_eq!(RenderOptions::new(None, false).scale, 1);
        assert_eq!(RenderOptions::new(None, true).scale, 2);
        assert_eq!(RenderOptions::new(Some(3), true).scale, 3);
        assert_eq!(RenderOptions::default(), RenderOptions::new(None, false));
    }

    #[test]
    fn test_options_pixel_size() {
        assert_eq!(RenderOptions::new(None, false).pixel_size(), 2);
        assert_eq!(RenderOptions::new(None, true).pixel_size(), 1);
    }

    #[test]
    fn test_plain_dimensions() {
        let w = weave(vec![0, 0, 1, 1], vec![1, 1, 1]);
        let sampler = Sampler::new(&w, &RenderOptions::default());
        assert_eq!((sampler.width(), sampler.height()), (8, 6));
    }

    #[test]
    fn test_diagonal_dimensions() {
        let w = weave(vec![0, 0, 1, 1], vec![1, 1, 1]);
        let sampler = Sampler::new(&w, &RenderOptions::new(None, true));
        assert_eq!((sampler.width(), sampler.height()), (4, 3));
    }

    #[test]
    fn test_plain_alternates_every_pixel_size() {
        // Warp threads are all 0 and weft threads all 1, so the colour
        // reveals which thread is on top.
        let w = weave(vec![0; 5], vec![1; 5]);
        let sampler = Sampler::new(&w, &RenderOptions::default());

        for y in 0..sampler.height() {
            for x in 0..sampler.width() {
                let expected = if ((x + y) / 2) % 2 == 1 { 0 } else { 1 };
                assert_eq!(sampler.colour_at(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_plain_is_periodic_along_diagonal() {
        let w = weave(vec![0; 6], vec![1; 6]);
        let sampler = Sampler::new(&w, &RenderOptions::default());

        for x in 0..8 {
            assert_eq!(sampler.colour_at(x, 0), sampler.colour_at(x + 4, 0));
            assert_ne!(sampler.colour_at(x, 0), sampler.colour_at(x + 2, 0));
        }
    }

    #[test]
    fn test_plain_samples_thread_under_pixel() {
        let w = weave(vec![0, 1, 2], vec![3, 4, 5]);
        let sampler = Sampler::new(&w, &RenderOptions::default());

        // (2 + 0) / 2 = 1, odd: warp column 2 / 2 = 1
        assert_eq!(sampler.colour_at(2, 0), 1);
        // (4 + 4) / 2 = 4, even: weft row 4 / 2 = 2
        assert_eq!(sampler.colour_at(4, 4), 5);
        // (5 + 0) / 2 = 2, even: weft row 0
        assert_eq!(sampler.colour_at(5, 0), 3);
    }

    #[test]
    fn test_diagonal_odd_columns_use_weft() {
        let w = weave(vec![0, 1, 2, 3], vec![4, 5, 6]);
        let sampler = Sampler::new(&w, &RenderOptions::new(None, true));

        // weft[(1 + 0) % 3] and weft[(3 + 2) % 3]
        assert_eq!(sampler.colour_at(1, 0), 5);
        assert_eq!(sampler.colour_at(3, 2), 6);
    }

    #[test]
    fn test_diagonal_even_columns_use_warp() {
        let w = weave(vec![0, 1, 2, 3], vec![4, 5, 6]);
        let sampler = Sampler::new(&w, &RenderOptions::new(None, true));

        // warp[(2 - 0) mod 4] with y - x = -2 wrapping to 2
        assert_eq!(sampler.colour_at(2, 0), 2);
        // warp[(2 - 0) mod 4]
        assert_eq!(sampler.colour_at(0, 2), 2);
        assert_eq!(sampler.colour_at(0, 0), 0);
    }

    #[test]
    fn test_diagonal_negative_offset_wraps() {
        let w = weave(vec![0, 1, 2, 3], vec![4]);
        let sampler = Sampler::new(&w, &RenderOptions::new(None, true));

        // y - x = -10, -10 mod 4 = 2
        assert_eq!(sampler.colour_at(10, 0), 2);
        // y - x = -3, -3 mod 4 = 1
        assert_eq!(sampler.colour_at(4, 1), 1);
    }

    #[test]
    fn test_render_grid() {
        let w = weave(vec![0, 1], vec![2]);
        let sampler = Sampler::new(&w, &RenderOptions::default());
        let rendered = sampler.render().unwrap();

        assert_eq!(rendered.width(), 4);
        assert_eq!(rendered.height(), 2);
        assert_eq!(rendered.pixels().len(), 8);
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(rendered.get(x, y), Some(sampler.colour_at(x, y)));
            }
        }
        assert_eq!(rendered.get(4, 0), None);
        assert_eq!(rendered.rows().count(), 2);
    }

    #[test]
    fn test_render_rows_are_top_down() {
        let w = weave(vec![0], vec![1, 2]);
        let rendered = Sampler::new(&w, &RenderOptions::default()).render().unwrap();

        // The second weft thread only shows in the bottom rows
        let rows: Vec<&[ColourIndex]> = rendered.rows().collect();
        assert_eq!(rows, vec![&[1u8, 1][..], &[1, 0][..], &[0, 0][..], &[0, 2][..]]);
    }

    #[test]
    fn test_render_too_large() {
        let w = weave(vec![0; 10_000], vec![1; 10_000]);
        let err = Sampler::new(&w, &RenderOptions::default()).render().unwrap_err();

        assert!(matches!(
            err,
            TartanError::ImageTooLarge {
                width: 20_000,
                height: 20_000,
                max: MAX_PIXELS,
            }
        ));
    }

    #[test]
    fn test_render_at_pixel_limit() {
        // 4096 threads, two pixels each: exactly 8192 x 8192
        let w = weave(vec![0; 4096], vec![1; 4096]);
        let sampler = Sampler::new(&w, &RenderOptions::default());
        assert_eq!(sampler.width() * sampler.height(), MAX_PIXELS);
    }
}
