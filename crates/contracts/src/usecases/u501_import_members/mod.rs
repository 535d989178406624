pub mod request;
pub mod response;
pub mod template;

pub use request::ImportOptions;
pub use response::{BulkImportResult, ImportError};
