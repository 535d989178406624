use contracts::system::auth::{UserInfo, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::query_cache::QueryClient;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Igreja em que o usuário está operando
    pub active_church: Option<u64>,
    /// Restauração da sessão salva ainda em andamento
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn role(&self) -> UserRole {
        self.user_info.as_ref().map(|u| u.role).unwrap_or_default()
    }

    fn signed_in(access_token: String, user: UserInfo) -> Self {
        let active_church = storage::get_active_church().or(user.church_id);
        Self {
            access_token: Some(access_token),
            user_info: Some(user),
            active_church,
            restoring: false,
        }
    }
}

/// Restaura a sessão salva (token atual ou via refresh) e provê o estado.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let has_saved_token = storage::get_access_token().is_some();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: has_saved_token,
        ..Default::default()
    });

    if has_saved_token {
        spawn_local(async move {
            let restored = restore_session().await;
            match restored {
                Some(state) => {
                    log::info!("sessão restaurada");
                    set_auth_state.set(state);
                }
                None => {
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;
    if let Ok(user) = api::get_current_user(&access_token).await {
        return Some(AuthState::signed_in(access_token, user));
    }

    // token expirado: tenta o refresh uma vez
    let refresh = storage::get_refresh_token()?;
    let response = api::refresh_token(refresh).await.ok()?;
    storage::save_access_token(&response.access);
    let user = api::get_current_user(&response.access).await.ok()?;
    Some(AuthState::signed_in(response.access, user))
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access);
    storage::save_refresh_token(&response.refresh);
    log::info!("login: {}", response.user.email);

    set_auth_state.set(AuthState::signed_in(response.access, response.user));
    Ok(())
}

/// Encerra a sessão: revoga o refresh, limpa storage, estado e cache
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>, query_client: QueryClient) {
    if let Some(refresh) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh).await {
            log::warn!("logout no backend falhou: {}", e);
        }
    }

    storage::clear_session();
    query_client.clear();
    set_auth_state.set(AuthState::default());
}

/// Troca a igreja ativa; listas de outra igreja deixam de valer
pub fn switch_church(church_id: u64, set_auth_state: WriteSignal<AuthState>, query_client: QueryClient) {
    storage::save_active_church(church_id);
    query_client.clear();
    set_auth_state.update(|s| s.active_church = Some(church_id));
}
