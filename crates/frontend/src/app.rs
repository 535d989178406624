use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::app_config;
use crate::shared::query_cache::QueryClient;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // cache de consultas compartilhado; limpo no logout e na troca de igreja
    provide_context(QueryClient::new(app_config().stale_time_ms));
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
