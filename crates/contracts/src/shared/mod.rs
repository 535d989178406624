pub mod api_error;
pub mod paginated;

pub use api_error::ApiErrorBody;
pub use paginated::{ListQuery, Paginated};
