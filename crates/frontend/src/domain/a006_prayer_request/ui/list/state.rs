use contracts::domain::a006_prayer_request::{PrayerCategory, PrayerStatus};
use contracts::domain::common::Choice;
use contracts::shared::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PrayersListState {
    pub status: Option<PrayerStatus>,
    pub category: Option<PrayerCategory>,
}

impl Default for PrayersListState {
    fn default() -> Self {
        // mural abre nos pedidos em aberto
        Self {
            status: Some(PrayerStatus::Active),
            category: None,
        }
    }
}

impl PrayersListState {
    pub fn to_query(&self, page: usize, page_size: usize) -> ListQuery {
        let mut query =
            ListQuery::new(page, page_size).with_status(self.status.map(|s| s.as_str().to_string()));
        query.category = self.category.map(|c| c.as_str().to_string());
        query
    }
}

pub fn create_state() -> RwSignal<PrayersListState> {
    RwSignal::new(PrayersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_filters_active() {
        let q = PrayersListState::default().to_query(1, 21);
        assert_eq!(q.status.as_deref(), Some("active"));
        assert!(q.category.is_none());

        let state = PrayersListState {
            status: None,
            category: Some(PrayerCategory::Health),
        };
        let q = state.to_query(3, 10);
        assert!(q.status.is_none());
        assert_eq!(q.category.as_deref(), Some("health"));
    }
}
