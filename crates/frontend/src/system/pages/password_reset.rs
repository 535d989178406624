//! Redefinição de senha: pedido por e-mail e confirmação com o token do link.

use contracts::system::auth::PasswordResetConfirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use crate::system::auth::api;

const RESET_TOKEN_PARAM: &str = "reset_token";

/// Token do link enviado por e-mail (`?reset_token=...`)
pub fn reset_token_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    token_from_query(&search)
}

fn token_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(RESET_TOKEN_PARAM)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn clear_token_from_url() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/"));
    }
}

#[component]
pub fn PasswordResetRequestForm(on_back: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (feedback, set_feedback) = signal(Option::<Result<String, String>>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get().trim().to_lowercase();
        set_is_loading.set(true);
        set_feedback.set(None);

        spawn_local(async move {
            let result = api::request_password_reset(email_val).await.map(|r| {
                if r.message.is_empty() {
                    "Se o e-mail estiver cadastrado, você receberá um link para redefinir a senha."
                        .to_string()
                } else {
                    r.message
                }
            });
            set_feedback.set(Some(result));
            set_is_loading.set(false);
        });
    };

    view! {
        <h2>"Recuperar senha"</h2>
        {move || feedback.get().map(|f| match f {
            Ok(msg) => view! { <div class="success-message">{msg}</div> }.into_any(),
            Err(e) => view! { <div class="error-message" role="alert">{e}</div> }.into_any(),
        })}
        <form on:submit=on_submit>
            <div class="form-group">
                <label for="reset-email">"E-mail"</label>
                <input
                    type="email"
                    id="reset-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>
            <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Enviando..." } else { "Enviar link" }}
            </button>
        </form>
        <button class="btn-link" on:click=move |_| on_back.run(())>"Voltar ao login"</button>
    }
}

#[component]
pub fn PasswordResetConfirmForm(token: String, on_done: Callback<()>) -> impl IntoView {
    let token = StoredValue::new(token);
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (done, set_done) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = PasswordResetConfirm {
            token: token.get_value(),
            new_password: password.get(),
            new_password_confirm: confirm.get(),
        };
        // validação local antes de qualquer requisição
        if let Err(e) = payload.validate() {
            set_error.set(Some(e));
            return;
        }

        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::confirm_password_reset(payload).await {
                Ok(_) => {
                    clear_token_from_url();
                    set_done.set(true);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <h2>"Nova senha"</h2>
        <Show
            when=move || done.get()
            fallback=move || view! {
                {move || error.get().map(|e| view! { <div class="error-message" role="alert">{e}</div> })}
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="new-password">"Nova senha"</label>
                        <input
                            type="password"
                            id="new-password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">"Confirmar senha"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        "Redefinir senha"
                    </button>
                </form>
            }
        >
            <div class="success-message">"Senha redefinida. Faça login com a nova senha."</div>
            <button class="btn-primary" on:click=move |_| on_done.run(())>"Ir para o login"</button>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_query() {
        assert_eq!(token_from_query("?reset_token=abc123"), Some("abc123".to_string()));
        assert_eq!(token_from_query("?active=x&reset_token=t"), Some("t".to_string()));
        assert_eq!(token_from_query("?reset_token="), None);
        assert_eq!(token_from_query(""), None);
    }
}
