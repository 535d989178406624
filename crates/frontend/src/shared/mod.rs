pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod csv_importer;
pub mod debounce;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod masks;
pub mod paged_list;
pub mod pagination;
pub mod query_cache;
