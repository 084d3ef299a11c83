pub mod error;
pub mod formats;
pub mod fs;
pub mod validation;

pub use error::{ConverterError, ConverterResult, ProcessingError, ValidationError};
pub use formats::{InputFormat, format_from_path, is_eligible};
pub use fs::{
    ensure_output_dir,
    extract_filename,
    list_eligible_files,
    output_path_for,
    write_atomic,
};
pub use validation::validate_request;
