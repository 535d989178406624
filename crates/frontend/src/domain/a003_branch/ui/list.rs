use super::qr_card::BranchQRCard;
use crate::domain::a003_branch::api;
use crate::shared::components::PageHeader;
use crate::shared::query_cache::{use_query_client, QueryKey};
use crate::system::auth::use_auth;
use contracts::domain::a003_branch::Branch;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Filiais da igreja ativa, cada uma com seu QR code
#[component]
#[allow(non_snake_case)]
pub fn BranchesList() -> impl IntoView {
    let query_client = use_query_client();
    let (auth_state, _) = use_auth();
    let can_manage = auth_state.with_untracked(|s| s.role().can_manage_branches());
    let branches = RwSignal::new(Vec::<Branch>::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        match query_client
            .fetch_cached(QueryKey::new(api::RESOURCE), api::list_branches)
            .await
        {
            Ok(page) => branches.set(page.results),
            Err(e) => error.set(Some(e)),
        }
        is_loading.set(false);
    });

    view! {
        <div class="page">
            <PageHeader title="Filiais" icon_name="church" subtitle="QR codes para cadastro de visitantes" />
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <Show when=move || is_loading.get()>
                <div class="empty-state">"Carregando..."</div>
            </Show>
            <div class="card-grid">
                <For
                    each=move || branches.get()
                    key=|b| b.id
                    children=move |b| view! { <BranchQRCard branch=b can_manage=can_manage /> }
                />
            </div>
        </div>
    }
}
