pub mod convert;

pub use convert::{convert_folder, spawn_conversion};
