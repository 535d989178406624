use contracts::domain::a005_visitor::FollowUpStatus;
use contracts::domain::common::Choice;
use contracts::shared::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitorsListState {
    pub search: String,
    pub follow_up: Option<FollowUpStatus>,
}

impl VisitorsListState {
    pub fn to_query(&self, page: usize, page_size: usize) -> ListQuery {
        ListQuery::new(page, page_size)
            .with_search(&self.search)
            .with_status(self.follow_up.map(|s| s.as_str().to_string()))
    }
}

pub fn create_state() -> RwSignal<VisitorsListState> {
    RwSignal::new(VisitorsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_uses_follow_up_wire_value() {
        let state = VisitorsListState {
            search: String::new(),
            follow_up: Some(FollowUpStatus::NotInterested),
        };
        let q = state.to_query(1, 10);
        assert_eq!(q.status.as_deref(), Some(FollowUpStatus::NotInterested.as_str()));
        assert!(q.search.is_none());
    }
}
