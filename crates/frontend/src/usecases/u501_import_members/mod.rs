pub mod api;
mod report;
mod view;

pub use view::ImportMembersPage;
