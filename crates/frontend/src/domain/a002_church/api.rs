use contracts::domain::a002_church::Church;
use contracts::shared::Paginated;

use crate::shared::api_utils::{api_url, get_json};

pub const RESOURCE: &str = "churches";

/// Igrejas visíveis para o usuário (uma para admin de igreja, várias para
/// admin de denominação e super admin)
pub async fn list_churches() -> Result<Paginated<Church>, String> {
    get_json(&api_url("/churches/?page_size=100")).await
}
