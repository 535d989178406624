use serde::{Deserialize, Serialize};

/// Envelope paginado do backend (`count`, `next`, `previous`, `results`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

/// Parâmetros comuns das listagens (serializados como query string).
///
/// `page` é 1-based, como no backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    /// Termo de busca normalizado: vazio vira `None`.
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status.filter(|s| !s.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_missing_links() {
        let page: Paginated<u32> = serde_json::from_str(r#"{"count":3,"results":[1,2,3]}"#).unwrap();
        assert_eq!(page.count, 3);
        assert!(page.next.is_none());
        assert_eq!(page.results, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_query_search_normalized() {
        let q = ListQuery::new(1, 21).with_search("   ");
        assert_eq!(q.search, None);
        let q = ListQuery::new(2, 10).with_search("  Ana ");
        assert_eq!(q.search.as_deref(), Some("Ana"));
        assert_eq!(q.page, 2);
    }
}
