//! Image processing for the batch converter.
//!
//! - [`BatchConverter`]: Walks the input folder and reports each file.
//! - [`resize`]: Resize policy and Lanczos resampling.
//! - [`formats`]: WebP encoding through libwebp.

mod executor;
pub mod formats;
pub mod resize;

pub use executor::{BatchConverter, convert};
