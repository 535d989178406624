use contracts::system::auth::UserRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Renderiza `children` só quando o papel do usuário passa em `allow`.
#[component]
pub fn RequirePermission(
    allow: fn(UserRole) -> bool,
    #[prop(optional, into)]
    denied_message: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let denied_message = denied_message
        .unwrap_or_else(|| "Você não tem permissão para acessar esta área.".to_string());

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated() && allow(s.role()))
            fallback=move || view! { <div class="access-denied">{denied_message.clone()}</div> }
        >
            {children()}
        </Show>
    }
}

/// Área exclusiva do super admin da plataforma
#[component]
pub fn RequirePlatformAdmin(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequirePermission
            allow=UserRole::is_platform_admin
            denied_message="Acesso restrito aos administradores da plataforma."
        >
            {children()}
        </RequirePermission>
    }
}
