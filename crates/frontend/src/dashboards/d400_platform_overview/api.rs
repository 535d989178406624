use contracts::dashboards::d400_platform_overview::{PlatformOverview, TopChurch, TopChurchesQuery};

use crate::shared::api_utils::{api_url, get_json, with_query};

pub const RESOURCE: &str = "platform";

/// Números gerais; exige super admin no backend
pub async fn get_overview() -> Result<PlatformOverview, String> {
    get_json(&api_url("/platform/overview/")).await
}

pub async fn get_top_churches(query: &TopChurchesQuery) -> Result<Vec<TopChurch>, String> {
    get_json(&with_query(&api_url("/platform/top_churches/"), query)?).await
}
