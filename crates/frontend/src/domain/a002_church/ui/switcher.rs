use crate::domain::a002_church::api;
use crate::shared::query_cache::{use_query_client, QueryKey};
use crate::system::auth::context::switch_church;
use crate::system::auth::use_auth;
use contracts::domain::a002_church::Church;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Seletor da igreja ativa no cabeçalho. Só aparece com mais de uma igreja.
#[component]
pub fn ChurchSwitcher() -> impl IntoView {
    let query_client = use_query_client();
    let (auth_state, set_auth_state) = use_auth();
    let churches = RwSignal::new(Vec::<Church>::new());

    spawn_local(async move {
        match query_client
            .fetch_cached(QueryKey::new(api::RESOURCE), api::list_churches)
            .await
        {
            Ok(page) => churches.set(page.results),
            Err(e) => log::warn!("igrejas: {}", e),
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        if let Ok(id) = event_target_value(&ev).parse::<u64>() {
            if auth_state.with_untracked(|s| s.active_church) != Some(id) {
                log::info!("igreja ativa: {}", id);
                switch_church(id, set_auth_state, query_client);
            }
        }
    };

    view! {
        <Show when=move || churches.with(|c| c.len() > 1)>
            <select
                class="form-select church-switcher"
                title="Igreja ativa"
                prop:value=move || auth_state.with(|s| s.active_church.map(|id| id.to_string()).unwrap_or_default())
                on:change=on_change
            >
                <For
                    each=move || churches.get()
                    key=|c| c.id
                    children=move |c| {
                        let id = c.id;
                        let label = if c.short_name.is_empty() { c.name.clone() } else { c.short_name.clone() };
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || auth_state.with(|s| s.active_church == Some(id))
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </Show>
    }
}
