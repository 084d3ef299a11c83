// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{
    CancelToken, ConversionRequest, ConversionResult, ConversionSummary, ConverterSettings,
    ProgressEvent, ProgressSink, ResizeSettings,
};
pub use crate::processing::{BatchConverter, convert};
pub use crate::utils::{ConverterError, ConverterResult};
pub use crate::commands::*;
