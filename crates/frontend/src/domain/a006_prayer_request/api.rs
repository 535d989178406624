use contracts::domain::a006_prayer_request::{
    MarkAnsweredPayload, PrayResponse, PrayerRequest, PrayerRequestPayload,
};
use contracts::shared::{ListQuery, Paginated};

use crate::shared::api_utils::{api_url, get_json, post_empty, post_json, with_query};

pub const RESOURCE: &str = "prayers";

pub async fn list_prayers(query: &ListQuery) -> Result<Paginated<PrayerRequest>, String> {
    get_json(&with_query(&api_url("/prayers/requests/"), query)?).await
}

pub async fn create_prayer(payload: &PrayerRequestPayload) -> Result<PrayerRequest, String> {
    if payload.title.trim().is_empty() {
        return Err("Informe um título para o pedido".to_string());
    }
    post_json(&api_url("/prayers/requests/"), payload).await
}

/// "Orei por isso": alterna a participação e devolve o novo total
pub async fn pray(id: u64) -> Result<PrayResponse, String> {
    post_empty(&api_url(&format!("/prayers/requests/{}/pray/", id))).await
}

pub async fn mark_answered(id: u64, testimony: Option<String>) -> Result<PrayerRequest, String> {
    let body = MarkAnsweredPayload {
        answer_testimony: testimony.filter(|t| !t.trim().is_empty()),
    };
    post_json(&api_url(&format!("/prayers/requests/{}/mark_answered/", id)), &body).await
}
