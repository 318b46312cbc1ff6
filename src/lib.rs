//! Make a flat image background transparent via a seeded flood fill.
//!
//! The background is grown from the top-left pixel with a per-channel
//! tolerance of 20. Every pixel it reaches becomes `(0, 0, 0, 0)` in the RGBA
//! output; everything else keeps its colour at full opacity.
//!
//! # Quick Start
//!
//! ```no_run
//! use floodfill_transparency::{remove_background, RemovalOptions};
//!
//! let img = image::open("favicon.png").unwrap().to_rgb8();
//! let out = remove_background(&img, &RemovalOptions::default()).unwrap();
//! out.save("favicon_final.png").unwrap();
//! ```
//!
//! # Files
//!
//! [`process_file`] wraps the pipeline with decoding and saving. An input that
//! cannot be decoded is logged and reported without writing anything.
//!
//! ```no_run
//! use std::path::Path;
//! use floodfill_transparency::{process_file, RemovalOptions};
//!
//! let result = process_file(
//!     Path::new("favicon.png"),
//!     Path::new("favicon_final.png"),
//!     &RemovalOptions::default(),
//! )
//! .unwrap();
//! println!("{}", result.message);
//! ```

#![deny(missing_docs)]

pub mod alpha;
mod engine;
pub mod error;
pub mod floodfill;
pub mod mask;

pub use engine::{
    background_mask, default_output_path, is_supported_output, output_format, process_file,
    remove_background, save_image, ProcessResult, RemovalOptions, SEED, TOLERANCE,
};
pub use error::{Error, Result};
pub use floodfill::{Connectivity, FloodRange};
