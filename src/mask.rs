//! Padded flood-fill mask and the background indicator derived from it.
//!
//! The mask is one pixel larger than the image on every side. The flood fill
//! writes a nonzero border into that padding so neighbour lookups never need
//! bounds checks; [`FloodMask::background_indicator`] crops it away again.

use crate::error::{Error, Result};

/// Value written into the mask border by the flood fill.
pub(crate) const BORDER_VALUE: u8 = 1;

/// A zero-initialised `(height + 2) x (width + 2)` flood-fill mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FloodMask {
    /// Create an all-zero mask for an image of `width x height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize + 2) * (height as usize + 2);
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Width of the image this mask covers (without padding).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image this mask covers (without padding).
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length of the padded buffer.
    #[must_use]
    pub(crate) fn stride(&self) -> usize {
        self.width as usize + 2
    }

    /// Mask value at image coordinates `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.padded_index(x, y)])
    }

    /// Mark image pixel `(x, y)` with `value`.
    ///
    /// Pre-marked pixels act as barriers: the flood fill never enters them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeedOutOfBounds`] if `(x, y)` lies outside the image.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::SeedOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.padded_index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Index into the padded buffer for image coordinates `(x, y)`.
    #[inline]
    pub(crate) fn padded_index(&self, x: u32, y: u32) -> usize {
        (y as usize + 1) * self.stride() + x as usize + 1
    }

    #[cfg(test)]
    fn raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Fill the one-pixel padding with [`BORDER_VALUE`].
    pub(crate) fn close_border(&mut self) {
        let stride = self.stride();
        let rows = self.height as usize + 2;

        self.data[..stride].fill(BORDER_VALUE);
        self.data[(rows - 1) * stride..].fill(BORDER_VALUE);
        for row in 1..rows - 1 {
            self.data[row * stride] = BORDER_VALUE;
            self.data[row * stride + stride - 1] = BORDER_VALUE;
        }
    }

    /// Crop the padding and threshold at zero.
    #[must_use]
    pub fn background_indicator(&self) -> BackgroundIndicator {
        let stride = self.stride();
        let width = self.width as usize;
        let mut data = Vec::with_capacity(width * self.height as usize);

        for row in self.data.chunks_exact(stride).skip(1).take(self.height as usize) {
            data.extend(row[1..=width].iter().map(|&v| v > 0));
        }

        BackgroundIndicator {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Per-pixel background flags with exactly the image's dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundIndicator {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BackgroundIndicator {
    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` belongs to the background. `false` outside the image.
    #[must_use]
    pub fn is_background(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Number of background pixels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Row-major flags, one per pixel.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}
