use contracts::domain::a004_member::MembershipStatus;
use contracts::domain::common::Choice;
use contracts::shared::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MembersListState {
    /// Termo já assentado pelo debounce
    pub search: String,
    pub status: Option<MembershipStatus>,
    pub branch: Option<u64>,
}

impl MembersListState {
    pub fn to_query(&self, page: usize, page_size: usize) -> ListQuery {
        let mut query = ListQuery::new(page, page_size)
            .with_search(&self.search)
            .with_status(self.status.map(|s| s.as_str().to_string()));
        query.branch = self.branch;
        query
    }
}

pub fn create_state() -> RwSignal<MembersListState> {
    RwSignal::new(MembersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query() {
        let state = MembersListState {
            search: "  ana ".to_string(),
            status: Some(MembershipStatus::Inactive),
            branch: Some(3),
        };
        let q = state.to_query(2, 21);
        assert_eq!(q.search.as_deref(), Some("ana"));
        assert_eq!(q.status.as_deref(), Some("inactive"));
        assert_eq!(q.branch, Some(3));
        assert_eq!((q.page, q.page_size), (2, 21));

        let q = MembersListState::default().to_query(1, 10);
        assert!(q.search.is_none() && q.status.is_none() && q.branch.is_none());
    }
}
