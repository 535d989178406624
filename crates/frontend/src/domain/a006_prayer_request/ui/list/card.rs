use crate::domain::a006_prayer_request::api;
use crate::shared::components::ChoiceBadge;
use crate::shared::icons::icon;
use contracts::domain::a006_prayer_request::{PrayerRequest, PrayerStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Cartão do mural de oração.
///
/// "Orei" alterna a participação do usuário e atualiza o contador com o valor
/// devolvido pelo backend. "Respondida" pede um testemunho opcional.
#[component]
pub fn PrayerCard(
    prayer: PrayerRequest,
    /// Pedido atualizado pelo backend
    on_changed: Callback<PrayerRequest>,
    on_error: Callback<String>,
) -> impl IntoView {
    let id = prayer.id;
    let count = RwSignal::new(prayer.prayers_count);
    let is_praying = RwSignal::new(prayer.is_praying);
    let busy = RwSignal::new(false);
    let is_answered = prayer.status == PrayerStatus::Answered;
    let created = prayer
        .created_at
        .map(|d| d.with_timezone(&chrono::Local).format("%d/%m/%Y").to_string())
        .unwrap_or_default();

    let pray = move |_| {
        busy.set(true);
        spawn_local(async move {
            match api::pray(id).await {
                Ok(resp) => {
                    count.set(resp.prayers_count);
                    is_praying.set(resp.is_praying);
                }
                Err(e) => on_error.run(e),
            }
            busy.set(false);
        });
    };

    let answer = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        // cancelar no prompt aborta; texto vazio marca sem testemunho
        let Ok(Some(testimony)) = window.prompt_with_message("Testemunho (opcional):") else {
            return;
        };
        busy.set(true);
        spawn_local(async move {
            match api::mark_answered(id, Some(testimony)).await {
                Ok(updated) => on_changed.run(updated),
                Err(e) => on_error.run(e),
            }
            busy.set(false);
        });
    };

    view! {
        <article class="prayer-card" class:prayer-card--answered=is_answered>
            <header class="prayer-card__header">
                <h3 class="prayer-card__title">{prayer.title.clone()}</h3>
                <ChoiceBadge choice=prayer.category />
            </header>
            <p class="prayer-card__content">{prayer.content.clone()}</p>
            {prayer.answer_testimony.clone().map(|t| view! {
                <blockquote class="prayer-card__testimony">{t}</blockquote>
            })}
            <footer class="prayer-card__footer">
                <span class="prayer-card__meta">
                    {prayer.author_display().to_string()}
                    " · "
                    {created}
                </span>
                <div class="prayer-card__actions">
                    <button
                        class="btn btn-sm"
                        class:btn-primary=move || is_praying.get()
                        class:btn-secondary=move || !is_praying.get()
                        disabled=move || busy.get() || is_answered
                        on:click=pray
                    >
                        {icon("heart")}
                        {move || format!(" Orei ({})", count.get())}
                    </button>
                    <Show when=move || !is_answered>
                        <button class="btn btn-secondary btn-sm" disabled=move || busy.get() on:click=answer>
                            {icon("check")}
                            " Respondida"
                        </button>
                    </Show>
                </div>
            </footer>
        </article>
    }
}
