pub mod parser;
pub mod types;
pub mod widget;

pub use types::{generate_preview, validate_file, FileValidationError, PreviewRow, UploadConfig};
pub use widget::{CsvPreviewTable, CsvUploader};
