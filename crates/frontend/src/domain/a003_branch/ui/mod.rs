mod list;
mod qr_card;

pub use list::BranchesList;
pub use qr_card::BranchQRCard;
