use contracts::domain::a005_visitor::{ConversionResponse, FollowUpStatus, FollowUpUpdate, Visitor};
use contracts::shared::{ListQuery, Paginated};

use crate::shared::api_utils::{api_url, get_json, patch_json, post_empty, with_query};

pub const RESOURCE: &str = "visitors";

pub async fn list_visitors(query: &ListQuery) -> Result<Paginated<Visitor>, String> {
    get_json(&with_query(&api_url("/visitors/"), query)?).await
}

pub async fn update_follow_up(
    id: u64,
    status: FollowUpStatus,
    notes: Option<String>,
) -> Result<Visitor, String> {
    let body = FollowUpUpdate {
        follow_up_status: status,
        notes,
    };
    patch_json(&api_url(&format!("/visitors/{}/update_follow_up/", id)), &body).await
}

/// Cria o membro a partir do visitante; o backend marca `converted_to_member`
pub async fn convert_to_member(id: u64) -> Result<ConversionResponse, String> {
    post_empty(&api_url(&format!("/visitors/{}/convert_to_member/", id))).await
}
