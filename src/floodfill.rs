//! Seeded flood fill over an RGB image with per-channel tolerance.
//!
//! The fill grows a region from a seed pixel. A neighbour joins the region
//! when every channel lies within `[reference - lo, reference + up]`, where the
//! reference is either the neighbour it was reached from ([`FloodRange::Floating`])
//! or the seed itself ([`FloodRange::Fixed`]). Reached pixels are marked in a
//! [`FloodMask`] and, once traversal is done, repainted with the fill colour.

use std::collections::VecDeque;

use image::{Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::mask::FloodMask;

/// Mask value written for filled pixels unless overridden.
pub const DEFAULT_MASK_VALUE: u8 = 1;

/// Allowed downward (`lo`) and upward (`up`) deviation per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    /// Maximum amount a channel may lie below the reference.
    pub lo: [u8; 3],
    /// Maximum amount a channel may lie above the reference.
    pub up: [u8; 3],
}

impl Tolerance {
    /// Same deviation in both directions on every channel.
    #[must_use]
    pub const fn uniform(diff: u8) -> Self {
        Self {
            lo: [diff; 3],
            up: [diff; 3],
        }
    }

    /// Whether `candidate` lies within the band around `reference`.
    #[must_use]
    pub fn accepts(&self, candidate: Rgb<u8>, reference: Rgb<u8>) -> bool {
        (0..3).all(|ch| {
            let c = i16::from(candidate[ch]);
            let r = i16::from(reference[ch]);
            r - i16::from(self.lo[ch]) <= c && c <= r + i16::from(self.up[ch])
        })
    }
}

/// Which neighbours of a pixel are considered connected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Horizontal and vertical neighbours.
    #[default]
    Four,
    /// Horizontal, vertical and diagonal neighbours.
    Eight,
}

impl Connectivity {
    /// Neighbour offsets in a padded buffer with the given row length.
    #[allow(clippy::cast_possible_wrap)]
    fn offsets(self, stride: usize) -> Vec<isize> {
        let s = stride as isize;
        match self {
            Self::Four => vec![-s, -1, 1, s],
            Self::Eight => vec![-s - 1, -s, -s + 1, -1, 1, s - 1, s, s + 1],
        }
    }
}

/// What a candidate pixel is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloodRange {
    /// Compare with the already-filled neighbour the candidate is reached from.
    #[default]
    Floating,
    /// Compare with the seed pixel's colour.
    Fixed,
}

/// Size and bounding rectangle of a filled region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilledRegion {
    /// Number of pixels filled.
    pub area: usize,
    /// Left edge of the bounding rectangle.
    pub x: u32,
    /// Top edge of the bounding rectangle.
    pub y: u32,
    /// Width of the bounding rectangle.
    pub width: u32,
    /// Height of the bounding rectangle.
    pub height: u32,
}

/// Flood-fill parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodFill {
    /// Starting pixel `(x, y)`.
    pub seed: (u32, u32),
    /// Per-channel tolerance band.
    pub tolerance: Tolerance,
    /// Neighbourhood used while growing the region.
    pub connectivity: Connectivity,
    /// Reference colour for the tolerance band.
    pub range: FloodRange,
    /// Nonzero value written into the mask for filled pixels.
    pub mask_value: u8,
}

impl FloodFill {
    /// 4-connected floating-range fill from `seed`.
    #[must_use]
    pub fn new(seed: (u32, u32), tolerance: Tolerance) -> Self {
        Self {
            seed,
            tolerance,
            connectivity: Connectivity::default(),
            range: FloodRange::default(),
            mask_value: DEFAULT_MASK_VALUE,
        }
    }

    /// Grow the region, mark it in `mask`, then repaint it with `new_color`.
    ///
    /// The mask's padding is set to a nonzero border first. Pixels already
    /// nonzero in the mask are never entered. Colour comparisons always use
    /// the pixels as they were before repainting. If the seed itself is
    /// already marked, nothing is filled.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `mask` was built for other dimensions.
    /// - [`Error::InvalidMaskValue`] if `mask_value` is zero.
    /// - [`Error::SeedOutOfBounds`] if the seed lies outside the image.
    pub fn run(
        &self,
        image: &mut RgbImage,
        mask: &mut FloodMask,
        new_color: Rgb<u8>,
    ) -> Result<FilledRegion> {
        let (width, height) = image.dimensions();
        if mask.width() != width || mask.height() != height {
            return Err(Error::DimensionMismatch {
                expected_width: width,
                expected_height: height,
                actual_width: mask.width(),
                actual_height: mask.height(),
            });
        }
        if self.mask_value == 0 {
            return Err(Error::InvalidMaskValue);
        }
        let (sx, sy) = self.seed;
        if sx >= width || sy >= height {
            return Err(Error::SeedOutOfBounds {
                x: sx,
                y: sy,
                width,
                height,
            });
        }

        mask.close_border();
        let stride = mask.stride();
        let seed_idx = mask.padded_index(sx, sy);
        let offsets = self.connectivity.offsets(stride);
        let data = mask.raw_mut();

        if data[seed_idx] != 0 {
            return Ok(FilledRegion::default());
        }

        let seed_color = *image.get_pixel(sx, sy);
        let mut filled = Vec::new();
        let mut queue = VecDeque::new();
        data[seed_idx] = self.mask_value;
        queue.push_back(seed_idx);

        while let Some(idx) = queue.pop_front() {
            filled.push(idx);
            let reference = match self.range {
                FloodRange::Floating => pixel_at(image, stride, idx),
                FloodRange::Fixed => seed_color,
            };

            for &offset in &offsets {
                // The nonzero border keeps every neighbour inside the buffer.
                let n = idx.wrapping_add_signed(offset);
                if data[n] != 0 {
                    continue;
                }
                if self.tolerance.accepts(pixel_at(image, stride, n), reference) {
                    data[n] = self.mask_value;
                    queue.push_back(n);
                }
            }
        }

        Ok(paint(image, stride, &filled, new_color))
    }
}

/// Image pixel behind a padded mask index.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn pixel_at(image: &RgbImage, stride: usize, idx: usize) -> Rgb<u8> {
    let x = (idx % stride - 1) as u32;
    let y = (idx / stride - 1) as u32;
    *image.get_pixel(x, y)
}

#[allow(clippy::cast_possible_truncation)]
fn paint(image: &mut RgbImage, stride: usize, filled: &[usize], color: Rgb<u8>) -> FilledRegion {
    if filled.is_empty() {
        return FilledRegion::default();
    }

    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    for &idx in filled {
        let x = (idx % stride - 1) as u32;
        let y = (idx / stride - 1) as u32;
        image.put_pixel(x, y, color);
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    FilledRegion {
        area: filled.len(),
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    }
}
