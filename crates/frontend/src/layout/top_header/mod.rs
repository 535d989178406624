//! Barra superior: menu, igreja ativa, notificações, usuário e saída.

use crate::domain::a002_church::ui::ChurchSwitcher;
use crate::domain::a008_notification::ui::NotificationBell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::query_cache::use_query_client;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let query_client = use_query_client();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        ctx.close_all();
        spawn_local(do_logout(set_auth_state, query_client));
    };

    let user_name = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let role_label = move || auth_state.with(|s| s.role().label());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Obreiro Digital"</span>
            </div>

            <div class="top-header__actions">
                <ChurchSwitcher />
                <NotificationBell />
                <div class="top-header__user">
                    {icon("user")}
                    <span class="top-header__user-name">{user_name}</span>
                    <span class="top-header__user-role">{role_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
