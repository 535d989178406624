use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, DEFAULT_TAB};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

const PLATFORM_TAB: &str = "d400_platform_overview";

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    // abas vindas da URL (?active=) têm prioridade sobre a aba padrão
    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(Vec::is_empty) {
        let key = if auth_state.with_untracked(|s| s.role().is_platform_admin()) {
            PLATFORM_TAB
        } else {
            DEFAULT_TAB
        };
        tabs_store.open_tab(key, tab_label_for_key(key));
    }

    view! {
        <Shell
            sidebar=|| view! { <Sidebar /> }.into_any()
            content=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! { <div class="app-loading">"Carregando..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
