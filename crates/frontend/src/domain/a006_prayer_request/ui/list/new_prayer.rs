use crate::domain::a006_prayer_request::api;
use crate::shared::components::ChoiceSelect;
use contracts::domain::a006_prayer_request::{PrayerCategory, PrayerRequest, PrayerRequestPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NewPrayerForm(on_created: Callback<PrayerRequest>, on_cancel: Callback<()>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let category = RwSignal::new(Some(PrayerCategory::Other));
    let (is_anonymous, set_is_anonymous) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = PrayerRequestPayload {
            title: title.get().trim().to_string(),
            content: content.get().trim().to_string(),
            category: category.get().unwrap_or_default(),
            is_anonymous: is_anonymous.get(),
        };
        set_is_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_prayer(&payload).await {
                Ok(created) => on_created.run(created),
                Err(e) => set_error.set(Some(e)),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <form class="details-form prayer-form" on:submit=on_submit>
            {move || error.get().map(|e| view! { <div class="error-message" role="alert">{e}</div> })}
            <div class="form-group">
                <label for="prayer-title">"Título"</label>
                <input
                    type="text"
                    id="prayer-title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="prayer-content">"Pedido"</label>
                <textarea
                    id="prayer-content"
                    rows="3"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="prayer-category">"Categoria"</label>
                    <ChoiceSelect value=category id="prayer-category" />
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_anonymous.get()
                        on:change=move |ev| set_is_anonymous.set(event_target_checked(&ev))
                    />
                    " Pedido anônimo"
                </label>
            </div>
            <div class="details-actions">
                <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                    "Enviar"
                </button>
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
            </div>
        </form>
    }
}
