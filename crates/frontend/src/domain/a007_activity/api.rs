use contracts::domain::a007_activity::{Activity, Ministry};
use contracts::shared::Paginated;
use serde::Serialize;

use crate::shared::api_utils::{api_url, get_json, with_query};

pub const RESOURCE: &str = "activities";

/// Filtro da agenda: só atividades a partir de hoje
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivitiesQuery {
    pub upcoming: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ministry: Option<u64>,
}

impl ActivitiesQuery {
    pub fn upcoming(ministry: Option<u64>) -> Self {
        Self {
            upcoming: true,
            ministry,
        }
    }
}

pub async fn list_ministries() -> Result<Paginated<Ministry>, String> {
    get_json(&api_url("/activities/ministries/")).await
}

pub async fn list_activities(query: &ActivitiesQuery) -> Result<Paginated<Activity>, String> {
    get_json(&with_query(&api_url("/activities/activities/"), query)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let qs = serde_qs::to_string(&ActivitiesQuery::upcoming(Some(4))).unwrap();
        assert_eq!(qs, "upcoming=true&ministry=4");
        let qs = serde_qs::to_string(&ActivitiesQuery::upcoming(None)).unwrap();
        assert_eq!(qs, "upcoming=true");
    }
}
