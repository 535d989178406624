pub mod choice_select;
pub mod masked_input;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;

pub use choice_select::{ChoiceBadge, ChoiceSelect};
pub use masked_input::MaskedInput;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatFormat};
