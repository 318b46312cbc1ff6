//! Error types for the floodfill-transparency crate.

/// Errors that can occur while masking and writing an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The flood-fill seed lies outside the image.
    #[error("seed ({x}, {y}) is outside the {width}x{height} image")]
    SeedOutOfBounds {
        /// Seed x coordinate.
        x: u32,
        /// Seed y coordinate.
        y: u32,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// A mask or indicator does not match the image it is applied to.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        /// Width of the image being processed.
        expected_width: u32,
        /// Height of the image being processed.
        expected_height: u32,
        /// Width carried by the mask.
        actual_width: u32,
        /// Height carried by the mask.
        actual_height: u32,
    },

    /// The value written into the mask for filled pixels must be nonzero.
    #[error("flood mask value must be nonzero")]
    InvalidMaskValue,

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output format is not supported or cannot carry an alpha channel.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// An error occurred during image decoding or encoding.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let io_err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io_err.to_string().contains("gone"));

        let unsupported = Error::UnsupportedFormat("jpeg".to_string());
        assert!(unsupported.to_string().contains("jpeg"));

        let seed = Error::SeedOutOfBounds {
            x: 12,
            y: 3,
            width: 10,
            height: 20,
        };
        let msg = seed.to_string();
        assert!(msg.contains("(12, 3)"));
        assert!(msg.contains("10x20"));

        let mismatch = Error::DimensionMismatch {
            expected_width: 4,
            expected_height: 5,
            actual_width: 6,
            actual_height: 7,
        };
        let msg = mismatch.to_string();
        assert!(msg.contains("4x5"));
        assert!(msg.contains("6x7"));
    }
}
