//! Background removal pipeline: decode, mask, widen, clear, save.

use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, Rgb, RgbImage, RgbaImage};
use log::{debug, error, info};

use crate::alpha::{clear_background, widen_to_rgba};
use crate::error::{Error, Result};
use crate::floodfill::{Connectivity, FloodFill, FloodRange, Tolerance};
use crate::mask::{BackgroundIndicator, FloodMask};

/// Per-channel tolerance of the background fill, in both directions.
pub const TOLERANCE: u8 = 20;

/// The background is always seeded at the top-left pixel.
pub const SEED: (u32, u32) = (0, 0);

/// Colour painted into the scratch copy. Only the mask is kept.
const SCRATCH_FILL: Rgb<u8> = Rgb([255, 0, 0]);

/// Options controlling how the background region grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Neighbourhood used by the flood fill (4-connected by default).
    pub connectivity: Connectivity,
    /// Tolerance reference (floating by default).
    pub range: FloodRange,
}

impl RemovalOptions {
    fn flood_fill(self) -> FloodFill {
        FloodFill {
            connectivity: self.connectivity,
            range: self.range,
            ..FloodFill::new(SEED, Tolerance::uniform(TOLERANCE))
        }
    }
}

/// Result of processing a single image file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the input file.
    pub input: PathBuf,
    /// Path the output was (or would have been) written to.
    pub output: PathBuf,
    /// Whether an output file was written.
    pub written: bool,
    /// Number of pixels made transparent.
    pub background_pixels: usize,
    /// Human-readable status message, also logged.
    pub message: String,
}

/// Flag the background region of `image`.
///
/// The flood fill runs on a scratch copy; `image` is left untouched.
///
/// # Errors
///
/// Returns [`Error::SeedOutOfBounds`] for an empty image.
pub fn background_mask(image: &RgbImage, opts: &RemovalOptions) -> Result<BackgroundIndicator> {
    let mut scratch = image.clone();
    let mut mask = FloodMask::new(image.width(), image.height());
    let region = opts.flood_fill().run(&mut scratch, &mut mask, SCRATCH_FILL)?;

    debug!(
        "background fill: {} px, bounds {}x{} at ({}, {})",
        region.area, region.width, region.height, region.x, region.y
    );

    Ok(mask.background_indicator())
}

/// Make the background of `image` transparent.
///
/// Returns an RGBA copy of `image` where every background pixel is
/// `(0, 0, 0, 0)` and every other pixel keeps its colour at alpha 255.
///
/// Running this again on its own output is not idempotent: cleared pixels
/// decode as black and may join or split the next background region.
///
/// # Errors
///
/// Returns [`Error::SeedOutOfBounds`] for an empty image.
pub fn remove_background(image: &RgbImage, opts: &RemovalOptions) -> Result<RgbaImage> {
    let background = background_mask(image, opts)?;
    let mut output = widen_to_rgba(image);
    let cleared = clear_background(&mut output, &background)?;
    debug!(
        "cleared {cleared} of {} pixels",
        u64::from(image.width()) * u64::from(image.height())
    );
    Ok(output)
}

/// Process a single image file: load, mask, clear, save.
///
/// An input that cannot be decoded is reported in the returned
/// [`ProcessResult`] (and logged) without writing any output.
///
/// # Errors
///
/// Returns an error if the output format is unsupported or writing fails.
pub fn process_file(input: &Path, output: &Path, opts: &RemovalOptions) -> Result<ProcessResult> {
    let mut result = ProcessResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        written: false,
        background_pixels: 0,
        message: String::new(),
    };

    let rgb_img = match decode_rgb(input) {
        Ok(img) => img,
        Err(e) => {
            result.message = format!(
                "Error: Could not open {}. Check the filename!",
                input.display()
            );
            error!("{}", result.message);
            debug!("decode failure: {e}");
            return Ok(result);
        }
    };

    let format = output_format(output)?;
    let background = background_mask(&rgb_img, opts)?;
    let mut rgba_img = widen_to_rgba(&rgb_img);
    result.background_pixels = clear_background(&mut rgba_img, &background)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    rgba_img.save_with_format(output, format)?;

    result.written = true;
    result.message = format!("Success! Saved to {}", output.display());
    info!("{}", result.message);
    Ok(result)
}

/// Decode `input` as 3-channel colour, sniffing the format from its contents.
///
/// Falls back to the extension when the contents are not recognised.
fn decode_rgb(input: &Path) -> image::ImageResult<RgbImage> {
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    Ok(img.to_rgb8())
}

/// Check if a path has an extension whose format can carry alpha.
#[must_use]
pub fn is_supported_output(path: &Path) -> bool {
    output_format(path).is_ok()
}

/// Save an RGBA image in the format implied by the path's extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions and formats
/// without an alpha channel (JPEG), or an I/O or encoding error.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format = output_format(path)?;
    img.save_with_format(path, format)?;
    Ok(())
}

/// Resolve the output format for `path`, rejecting formats without alpha.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions and JPEG.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp | ImageFormat::Tiff => Ok(format),
        ImageFormat::Jpeg => Err(Error::UnsupportedFormat(
            "JPEG cannot store an alpha channel".to_string(),
        )),
        _ => Err(Error::UnsupportedFormat(format!("{format:?}"))),
    }
}

/// Generate a default output path from an input path.
///
/// Example: `"favicon.png"` becomes `"favicon_final.png"`. Inputs without an
/// extension get `.png`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input
        .extension()
        .map_or_else(|| "png".into(), |e| e.to_string_lossy());
    let parent = input.parent().unwrap_or(Path::new(""));
    parent.join(format!("{stem}_final.{ext}"))
}
