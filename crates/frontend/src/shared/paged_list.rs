//! Carga paginada das listagens: cache, descarte de respostas superadas e
//! paginação responsiva num só handle.

use super::config::app_config;
use super::debounce::RequestSeq;
use super::pagination::{clamp_page, use_responsive_pagination, ResponsivePagination};
use super::query_cache::{use_query_client, QueryKey};
use contracts::shared::{ListQuery, Paginated};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

pub struct PagedList<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub pagination: ResponsivePagination,
    load: Callback<usize>,
}

impl<T: Send + Sync + 'static> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedList<T> {}

impl<T: Send + Sync + 'static> PagedList<T> {
    pub fn load(&self, page: usize) {
        self.load.run(page);
    }

    /// Filtros mudaram: página 1
    pub fn reload_first(&self) {
        self.pagination.reset();
        self.load(1);
    }

    /// Recarrega a página atual, limitada ao total conhecido
    pub fn reload_current(&self) {
        self.reload_with_total(self.pagination.state.with_untracked(|s| s.total_items));
    }

    /// Depois de excluir um item: se era o último da última página, volta uma
    pub fn reload_after_delete(&self) {
        let total = self.pagination.state.with_untracked(|s| s.total_items);
        self.reload_with_total(total.saturating_sub(1));
    }

    fn reload_with_total(&self, total_items: usize) {
        let page = clamp_page(
            self.pagination.current_page(),
            total_items,
            self.pagination.page_size(),
        );
        self.load(page);
    }

    pub fn on_page_change(&self) -> Callback<usize> {
        self.load
    }
}

/// Cria a listagem e faz a primeira carga.
///
/// `build_query(page, page_size)` lê os filtros sem rastrear; quem chama liga
/// um `Effect` nos filtros e chama `reload_first`. Troca de tamanho de página
/// (viewport) recarrega a mesma página, limitada ao novo total.
pub fn use_paged_list<T, Q, F, Fut>(resource: &'static str, build_query: Q, fetch: F) -> PagedList<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    Q: Fn(usize, usize) -> ListQuery + Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Paginated<T>, String>> + 'static,
{
    let pagination = use_responsive_pagination(app_config().mobile_breakpoint_px);
    let query_client = use_query_client();
    let items = RwSignal::new(Vec::<T>::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let seq = StoredValue::new(RequestSeq::new());

    let load = Callback::new(move |page: usize| {
        let query = build_query(page, pagination.page_size());
        let ticket = seq.with_value(RequestSeq::next);
        is_loading.set(true);

        spawn_local(async move {
            let key = QueryKey::with_params(resource, &query);
            let result = query_client.fetch_cached(key, || fetch(query)).await;

            if !seq.with_value(|s| s.is_current(ticket)) {
                leptos::logging::log!("{}: resposta descartada (ticket {})", resource, ticket);
                return;
            }

            match result {
                Ok(data) => {
                    pagination.update_pagination(data.count, Some(page));
                    items.set(data.results);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("{}: {}", resource, e);
                    error.set(Some(e));
                }
            }
            is_loading.set(false);
        });
    });

    let page_size = pagination.page_size_memo();
    Effect::new(move |prev: Option<usize>| {
        let size = page_size.get();
        if prev.is_some() {
            let total = pagination.state.with_untracked(|s| s.total_items);
            load.run(clamp_page(pagination.current_page(), total, size));
        }
        size
    });

    PagedList {
        items,
        error,
        is_loading,
        pagination,
        load,
    }
}
