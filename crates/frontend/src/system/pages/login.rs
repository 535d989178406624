use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::password_reset::{reset_token_from_url, PasswordResetConfirmForm, PasswordResetRequestForm};
use crate::system::auth::context::{do_login, use_auth};

#[derive(Clone, Debug, PartialEq)]
enum LoginMode {
    Login,
    ResetRequest,
    ResetConfirm(String),
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let initial_mode = match reset_token_from_url() {
        Some(token) => LoginMode::ResetConfirm(token),
        None => LoginMode::Login,
    };
    let mode = RwSignal::new(initial_mode);

    let back_to_login = Callback::new(move |_: ()| mode.set(LoginMode::Login));

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Obreiro Digital"</h1>
                {move || match mode.get() {
                    LoginMode::Login => view! {
                        <LoginForm on_forgot=Callback::new(move |_: ()| mode.set(LoginMode::ResetRequest)) />
                    }.into_any(),
                    LoginMode::ResetRequest => view! {
                        <PasswordResetRequestForm on_back=back_to_login />
                    }.into_any(),
                    LoginMode::ResetConfirm(token) => view! {
                        <PasswordResetConfirmForm token=token on_done=back_to_login />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(on_forgot: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_lowercase();
        let password_val = password.get();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Informe e-mail e senha".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // sucesso troca o estado de auth e o AppRoutes monta o layout
            if let Err(e) = do_login(email_val, password_val, set_auth_state).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <h2>"Entrar"</h2>

        <Show when=move || error_message.get().is_some()>
            <div class="error-message" role="alert">
                {move || error_message.get().unwrap_or_default()}
            </div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="email">"E-mail"</label>
                <input
                    type="email"
                    id="email"
                    autocomplete="username"
                    placeholder="voce@suaigreja.com.br"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="password">"Senha"</label>
                <input
                    type="password"
                    id="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
            </button>
        </form>

        <Button appearance=ButtonAppearance::Transparent on_click=move |_| on_forgot.run(())>
            "Esqueci minha senha"
        </Button>
    }
}
