//! Core application types.
//!
//! This module contains the plain values passed around the converter:
//! - [`ConversionRequest`]: What to convert and how
//! - [`ConverterSettings`]: The serde configuration object requests are built from
//! - [`ConversionResult`] / [`ConversionSummary`]: Per-file and per-run outcomes
//! - [`ProgressEvent`] / [`ProgressSink`]: The user-facing log stream
//! - [`CancelToken`]: Cooperative cancellation between files

mod cancel;
mod progress;
mod settings;
mod types;

pub use cancel::CancelToken;
pub use progress::{ChannelSink, ConsoleSink, MemorySink, ProgressEvent, ProgressSink, TallySink};
pub use settings::ConverterSettings;
pub use types::{ConversionRequest, ConversionResult, ConversionSummary, ResizeSettings};
