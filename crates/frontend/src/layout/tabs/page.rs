use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Conteúdo de uma aba. Fica montado enquanto a aba estiver aberta; só a
/// visibilidade acompanha a aba ativa.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    let key_for_active = key.clone();
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str()));

    log!("TabPage criado: {}", key);
    let key_for_cleanup = key.clone();
    on_cleanup(move || log!("TabPage removido: {}", key_for_cleanup));

    let content = render_tab_content(&key);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !is_active() data-tab-key=key>
            {content}
        </div>
    }
}
