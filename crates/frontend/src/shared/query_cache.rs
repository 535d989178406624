//! Cache explícito de respostas GET, chaveado pelos parâmetros da requisição.
//!
//! Entradas ficam frescas por `stale_time_ms`; depois disso a próxima leitura
//! busca de novo. Mutações chamam `invalidate(prefixo)` para derrubar todas as
//! listas afetadas (ex.: criar membro invalida `members/*`).

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

/// Chave de cache: recurso + parâmetros serializados
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(resource: &str) -> Self {
        Self(resource.to_string())
    }

    /// `resource?query` com os parâmetros em query string estável
    pub fn with_params<P: Serialize>(resource: &str, params: &P) -> Self {
        match serde_qs::to_string(params) {
            Ok(qs) if !qs.is_empty() => Self(format!("{}?{}", resource, qs)),
            _ => Self::new(resource),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn matches_prefix(&self, prefix: &str) -> bool {
        self.0 == prefix
            || self
                .0
                .strip_prefix(prefix)
                .map(|rest| rest.starts_with('/') || rest.starts_with('?'))
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_time_ms: f64,
}

impl QueryCache {
    pub fn new(stale_time_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time_ms,
        }
    }

    pub fn get_fresh<T: DeserializeOwned>(&self, key: &QueryKey, now_ms: f64) -> Option<T> {
        let entry = self.entries.get(key)?;
        if now_ms - entry.fetched_at_ms > self.stale_time_ms {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn insert<T: Serialize>(&mut self, key: QueryKey, value: &T, now_ms: f64) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        value,
                        fetched_at_ms: now_ms,
                    },
                );
            }
            Err(e) => log::warn!("query cache: falha ao serializar {}: {}", key.as_str(), e),
        }
    }

    /// Remove a chave exata e todas as que continuam com `/` ou `?`
    pub fn invalidate(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.matches_prefix(prefix));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Handle do cache no contexto da aplicação
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
}

impl QueryClient {
    pub fn new(stale_time_ms: f64) -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new(stale_time_ms)),
        }
    }

    /// Devolve o valor em cache se fresco; senão executa `fetcher` e guarda o
    /// resultado. Erros não são guardados.
    pub async fn fetch_cached<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, String>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, String>>,
    {
        let now = js_sys::Date::now();
        if let Some(hit) = self.cache.with_value(|c| c.get_fresh::<T>(&key, now)) {
            leptos::logging::log!("query cache hit: {}", key.as_str());
            return Ok(hit);
        }

        let value = fetcher().await?;
        let fetched_at = js_sys::Date::now();
        self.cache
            .update_value(|c| c.insert(key, &value, fetched_at));
        Ok(value)
    }

    pub fn invalidate(&self, prefix: &str) {
        let removed = self.cache.try_update_value(|c| c.invalidate(prefix)).unwrap_or(0);
        leptos::logging::log!("query cache: invalidated {} entries under {}", removed, prefix);
    }

    pub fn clear(&self) {
        self.cache.update_value(QueryCache::clear);
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Params {
        page: usize,
        search: Option<String>,
    }

    #[test]
    fn test_key_with_params() {
        let key = QueryKey::with_params(
            "members",
            &Params {
                page: 2,
                search: Some("ana".into()),
            },
        );
        assert_eq!(key.as_str(), "members?page=2&search=ana");
    }

    #[test]
    fn test_fresh_and_stale() {
        let mut cache = QueryCache::new(1000.0);
        let key = QueryKey::new("members/stats");
        cache.insert(key.clone(), &vec![1, 2, 3], 10_000.0);

        assert_eq!(cache.get_fresh::<Vec<i32>>(&key, 10_500.0), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_fresh::<Vec<i32>>(&key, 11_000.0), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_fresh::<Vec<i32>>(&key, 11_001.0), None);
    }

    #[test]
    fn test_wrong_type_is_a_miss() {
        let mut cache = QueryCache::new(1000.0);
        let key = QueryKey::new("x");
        cache.insert(key.clone(), &"texto", 0.0);
        assert_eq!(cache.get_fresh::<u32>(&key, 0.0), None);
    }

    #[test]
    fn test_invalidate_prefix() {
        let mut cache = QueryCache::new(60_000.0);
        cache.insert(QueryKey::new("members"), &1, 0.0);
        cache.insert(QueryKey::new("members?page=1"), &1, 0.0);
        cache.insert(QueryKey::new("members/stats"), &1, 0.0);
        cache.insert(QueryKey::new("members_export"), &1, 0.0);
        cache.insert(QueryKey::new("visitors?page=1"), &1, 0.0);

        assert_eq!(cache.invalidate("members"), 3);
        assert_eq!(cache.len(), 2);
        assert!(cache.get_fresh::<i32>(&QueryKey::new("members_export"), 0.0).is_some());
        assert!(cache.get_fresh::<i32>(&QueryKey::new("visitors?page=1"), 0.0).is_some());
    }
}
