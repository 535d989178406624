use contracts::domain::a003_branch::{Branch, QrCodeActionResponse};
use contracts::shared::Paginated;

use crate::shared::api_utils::{api_url, get_json, post_empty};

pub const RESOURCE: &str = "branches";

pub async fn list_branches() -> Result<Paginated<Branch>, String> {
    get_json(&api_url("/branches/?page_size=100")).await
}

/// Gera novo UUID/imagem; o link antigo deixa de funcionar
pub async fn regenerate_qr_code(id: u64) -> Result<QrCodeActionResponse, String> {
    post_empty(&api_url(&format!("/branches/{}/regenerate_qr_code/", id))).await
}

pub async fn toggle_qr_code(id: u64) -> Result<QrCodeActionResponse, String> {
    post_empty(&api_url(&format!("/branches/{}/toggle_qr_code/", id))).await
}
