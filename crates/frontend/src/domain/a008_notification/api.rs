use contracts::domain::a008_notification::{Notification, UnreadCount};
use contracts::system::auth::MessageResponse;
use contracts::shared::Paginated;

use crate::shared::api_utils::{api_url, get_json, post_empty};

pub async fn list_notifications() -> Result<Paginated<Notification>, String> {
    get_json(&api_url("/notifications/?page_size=20")).await
}

pub async fn unread_count() -> Result<UnreadCount, String> {
    get_json(&api_url("/notifications/unread_count/")).await
}

pub async fn mark_read(id: u64) -> Result<Notification, String> {
    post_empty(&api_url(&format!("/notifications/{}/mark_read/", id))).await
}

pub async fn mark_all_read() -> Result<MessageResponse, String> {
    post_empty(&api_url("/notifications/mark_all_read/")).await
}
