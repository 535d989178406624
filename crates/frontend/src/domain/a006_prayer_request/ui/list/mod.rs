mod card;
mod new_prayer;
pub mod state;

use self::card::PrayerCard;
use self::new_prayer::NewPrayerForm;
use self::state::create_state;
use crate::domain::a006_prayer_request::api;
use crate::shared::components::{ChoiceSelect, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::paged_list::use_paged_list;
use crate::shared::query_cache::use_query_client;
use contracts::domain::a006_prayer_request::{PrayerCategory, PrayerRequest, PrayerStatus};
use contracts::shared::ListQuery;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn PrayersList() -> impl IntoView {
    let state = create_state();
    let query_client = use_query_client();
    let list = use_paged_list(
        api::RESOURCE,
        move |page, page_size| state.with_untracked(|s| s.to_query(page, page_size)),
        |query: ListQuery| async move { api::list_prayers(&query).await },
    );

    let status_filter = RwSignal::new(state.with_untracked(|s| s.status));
    let category_filter = RwSignal::new(Option::<PrayerCategory>::None);
    let show_form = RwSignal::new(false);

    Effect::new(move |_| {
        state.track();
        list.reload_first();
    });

    let on_changed = Callback::new(move |updated: PrayerRequest| {
        query_client.invalidate(api::RESOURCE);
        list.items.update(|items| {
            if let Some(p) = items.iter_mut().find(|p| p.id == updated.id) {
                *p = updated;
            }
        });
    });
    let on_error = Callback::new(move |e: String| list.error.set(Some(e)));

    let on_created = Callback::new(move |_: PrayerRequest| {
        show_form.set(false);
        query_client.invalidate(api::RESOURCE);
        list.reload_first();
    });

    view! {
        <div class="page">
            <PageHeader title="Pedidos de oração" icon_name="heart">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.update(|v| *v = !*v)>
                    {icon("file-text")}
                    " Novo pedido"
                </Button>
            </PageHeader>

            <Show when=move || show_form.get()>
                <NewPrayerForm on_created=on_created on_cancel=Callback::new(move |_| show_form.set(false)) />
            </Show>

            <div class="filter-bar">
                <ChoiceSelect
                    value=status_filter
                    all_label="Todos"
                    on_change=Callback::new(move |s: Option<PrayerStatus>| state.update(|st| st.status = s))
                />
                <ChoiceSelect
                    value=category_filter
                    all_label="Todas as categorias"
                    on_change=Callback::new(move |c: Option<PrayerCategory>| state.update(|st| st.category = c))
                />
            </div>

            {move || list.error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="card-grid" class:card-grid--loading=move || list.is_loading.get()>
                <For
                    each=move || list.items.get()
                    key=|p| (p.id, p.status, p.answer_testimony.clone())
                    children=move |prayer| view! {
                        <PrayerCard prayer=prayer on_changed=on_changed on_error=on_error />
                    }
                />
            </div>
            <Show when=move || !list.is_loading.get() && list.items.with(Vec::is_empty)>
                <div class="empty-state">"Nenhum pedido de oração"</div>
            </Show>

            <PaginationControls pagination=list.pagination on_page_change=list.on_page_change() />
        </div>
    }
}
