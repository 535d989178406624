use contracts::domain::a004_member::{Member, MemberPayload};
use contracts::shared::{ListQuery, Paginated};

use crate::shared::api_utils::{api_url, delete, get_bytes, get_json, patch_json, post_json, with_query};

pub const RESOURCE: &str = "members";

pub async fn list_members(query: &ListQuery) -> Result<Paginated<Member>, String> {
    get_json(&with_query(&api_url("/members/"), query)?).await
}

pub async fn get_member(id: u64) -> Result<Member, String> {
    get_json(&api_url(&format!("/members/{}/", id))).await
}

pub async fn create_member(payload: &MemberPayload) -> Result<Member, String> {
    payload.validate()?;
    post_json(&api_url("/members/"), payload).await
}

pub async fn update_member(id: u64, payload: &MemberPayload) -> Result<Member, String> {
    payload.validate()?;
    patch_json(&api_url(&format!("/members/{}/", id)), payload).await
}

pub async fn delete_member(id: u64) -> Result<(), String> {
    delete(&api_url(&format!("/members/{}/", id))).await
}

/// CSV gerado no backend com os filtros da listagem (todas as páginas)
pub async fn export_members(query: &ListQuery) -> Result<Vec<u8>, String> {
    get_bytes(&with_query(&api_url("/members/export/"), &ExportQuery::from(query))?).await
}

#[derive(serde::Serialize)]
struct ExportQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<u64>,
    format: &'static str,
}

impl<'a> From<&'a ListQuery> for ExportQuery<'a> {
    fn from(q: &'a ListQuery) -> Self {
        Self {
            search: q.search.as_deref(),
            status: q.status.as_deref(),
            branch: q.branch,
            format: "csv",
        }
    }
}
