use crate::domain::a003_branch::api;
use crate::shared::clipboard::copy_with_feedback;
use crate::shared::export::download_url;
use crate::shared::icons::icon;
use crate::shared::query_cache::use_query_client;
use contracts::domain::a003_branch::{Branch, QrCodeActionResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;

/// QR code de cadastro de visitantes de uma filial.
///
/// Copiar link, baixar a imagem, regenerar (invalida o QR impresso) e
/// ativar/desativar o cadastro.
#[component]
pub fn BranchQRCard(branch: Branch, #[prop(optional)] can_manage: bool) -> impl IntoView {
    let query_client = use_query_client();
    let branch = RwSignal::new(branch);
    let busy = RwSignal::new(false);
    let (feedback, set_feedback) = signal(Option::<Result<String, String>>::None);

    let run_action = move |fut: Pin<Box<dyn Future<Output = Result<QrCodeActionResponse, String>>>>| {
        busy.set(true);
        spawn_local(async move {
            match fut.await {
                Ok(resp) => {
                    query_client.invalidate(api::RESOURCE);
                    branch.set(resp.data);
                    set_feedback.set(Some(Ok(resp.message)));
                }
                Err(e) => set_feedback.set(Some(Err(e))),
            }
            busy.set(false);
        });
    };

    let copy_link = move |_| {
        let url = branch.with_untracked(|b| b.visitor_registration_url.clone());
        copy_with_feedback(&url, move |result| {
            set_feedback.set(Some(result.map(|_| "Link copiado!".to_string())));
        });
    };

    let download = move |_| {
        let (image, file_name) = branch.with_untracked(|b| (b.qr_code_image.clone(), b.qr_file_name()));
        let result = image
            .ok_or_else(|| "QR code ainda não gerado".to_string())
            .and_then(|url| download_url(&url, &file_name));
        if let Err(e) = result {
            set_feedback.set(Some(Err(e)));
        }
    };

    let regenerate = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("O QR code atual deixará de funcionar. Continuar?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            let id = branch.with_untracked(|b| b.id);
            run_action(Box::pin(api::regenerate_qr_code(id)));
        }
    };

    let toggle = move |_| {
        let id = branch.with_untracked(|b| b.id);
        run_action(Box::pin(api::toggle_qr_code(id)));
    };

    let is_active = move || branch.with(|b| b.qr_code_active);

    view! {
        <div class="qr-card" class:qr-card--inactive=move || !is_active()>
            <header class="qr-card__header">
                <h3>{move || branch.with(|b| b.name.clone())}</h3>
                {move || branch.with(|b| b.is_main).then(|| view! { <span class="badge">"Sede"</span> })}
                <span class=move || if is_active() { "badge badge--active" } else { "badge badge--inactive" }>
                    {move || if is_active() { "Ativo" } else { "Inativo" }}
                </span>
            </header>

            <div class="qr-card__image">
                {move || match branch.with(|b| b.qr_code_image.clone()) {
                    Some(src) => view! { <img src=src alt="QR code de cadastro de visitantes" /> }.into_any(),
                    None => view! { <div class="qr-card__placeholder">{icon("qr-code")}</div> }.into_any(),
                }}
            </div>

            <p class="qr-card__stats">
                {move || format!("{} visitantes cadastrados pelo QR", branch.with(|b| b.total_visitors_registered))}
            </p>

            {move || feedback.get().map(|f| match f {
                Ok(msg) => view! { <div class="success-message">{msg}</div> }.into_any(),
                Err(e) => view! { <div class="error-message" role="alert">{e}</div> }.into_any(),
            })}

            <div class="qr-card__actions">
                <button class="btn btn-secondary btn-sm" on:click=copy_link
                    disabled=move || branch.with(|b| b.visitor_registration_url.is_empty())>
                    {icon("copy")}
                    " Copiar link"
                </button>
                <button class="btn btn-secondary btn-sm" on:click=download
                    disabled=move || !branch.with(Branch::has_qr_code)>
                    {icon("download")}
                    " Baixar"
                </button>
                <Show when=move || can_manage>
                    <button class="btn btn-secondary btn-sm" on:click=regenerate disabled=move || busy.get()>
                        {icon("refresh")}
                        " Regenerar"
                    </button>
                    <button class="btn btn-secondary btn-sm" on:click=toggle disabled=move || busy.get()>
                        {move || if is_active() { "Desativar" } else { "Ativar" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
