pub mod state;

use self::state::create_state;
use crate::domain::a005_visitor::api;
use crate::shared::components::{ChoiceSelect, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::masks::phone_mask;
use crate::shared::paged_list::{use_paged_list, PagedList};
use crate::shared::query_cache::{use_query_client, QueryClient};
use crate::system::auth::use_auth;
use contracts::domain::a005_visitor::{FollowUpStatus, Visitor};
use contracts::shared::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Troca o status de acompanhamento; em erro a seleção volta ao valor anterior.
fn change_follow_up(
    list: PagedList<Visitor>,
    query_client: QueryClient,
    visitor_id: u64,
    previous: FollowUpStatus,
    selected: RwSignal<Option<FollowUpStatus>>,
) {
    let Some(status) = selected.get_untracked() else {
        return;
    };
    spawn_local(async move {
        match api::update_follow_up(visitor_id, status, None).await {
            Ok(updated) => {
                query_client.invalidate(api::RESOURCE);
                list.items.update(|items| {
                    if let Some(v) = items.iter_mut().find(|v| v.id == updated.id) {
                        *v = updated;
                    }
                });
            }
            Err(e) => {
                selected.set(Some(previous));
                list.error.set(Some(e));
            }
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn VisitorsList() -> impl IntoView {
    let state = create_state();
    let query_client = use_query_client();
    let (auth_state, _) = use_auth();
    let can_manage = move || auth_state.with(|s| s.role().can_manage_visitors());

    let list = use_paged_list(
        api::RESOURCE,
        move |page, page_size| state.with_untracked(|s| s.to_query(page, page_size)),
        |query: ListQuery| async move { api::list_visitors(&query).await },
    );
    let follow_up_filter = RwSignal::new(Option::<FollowUpStatus>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    Effect::new(move |_| {
        state.track();
        list.reload_first();
    });

    let convert = move |visitor_id: u64, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Converter {} em membro?", name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::convert_to_member(visitor_id).await {
                Ok(resp) => {
                    log::info!("visitante {} convertido no membro {}", visitor_id, resp.member_id);
                    set_notice.set(Some(if resp.message.is_empty() {
                        format!("{} agora é membro", name)
                    } else {
                        resp.message
                    }));
                    query_client.invalidate(api::RESOURCE);
                    query_client.invalidate(crate::domain::a004_member::api::RESOURCE);
                    list.reload_current();
                }
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Visitantes" icon_name="user" subtitle=Signal::derive(move || {
                Some(format!("{} registrados", list.pagination.state.with(|s| s.total_items)))
            })>
                <button class="icon-btn" title="Atualizar" on:click=move |_| {
                    query_client.invalidate(api::RESOURCE);
                    list.reload_current();
                }>
                    {icon("refresh")}
                </button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput
                    on_change=Callback::new(move |text: String| state.update(|s| s.search = text))
                    placeholder="Buscar visitante"
                />
                <ChoiceSelect
                    value=follow_up_filter
                    all_label="Todos os status"
                    on_change=Callback::new(move |f: Option<FollowUpStatus>| state.update(|s| s.follow_up = f))
                />
            </div>

            {move || notice.get().map(|n| view! { <div class="success-message">{n}</div> })}
            {move || list.error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table-container" class:table-container--loading=move || list.is_loading.get()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Telefone"</th>
                            <th class="hide-mobile">"Cidade"</th>
                            <th class="hide-mobile">"Primeira visita"</th>
                            <th>"Acompanhamento"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || list.items.get()
                            key=|v| (v.id, v.follow_up_status, v.converted_to_member)
                            children=move |v: Visitor| {
                                let search = state.with_untracked(|s| s.search.clone());
                                let selected = RwSignal::new(Some(v.follow_up_status));
                                let previous = v.follow_up_status;
                                let visitor_id = v.id;
                                let can_convert = v.can_convert();
                                let name = StoredValue::new(v.full_name.clone());
                                let city = match (v.city.as_str(), v.state.as_str()) {
                                    ("", _) => "-".to_string(),
                                    (c, "") => c.to_string(),
                                    (c, uf) => format!("{}/{}", c, uf),
                                };
                                view! {
                                    <tr>
                                        <td>{highlight_matches(&v.full_name, &search)}</td>
                                        <td>{phone_mask(&v.phone)}</td>
                                        <td class="hide-mobile">{city}</td>
                                        <td class="hide-mobile">
                                            {v.first_visit.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()}
                                        </td>
                                        <td>
                                            <ChoiceSelect
                                                value=selected
                                                disabled=Signal::derive(move || !can_manage())
                                                on_change=Callback::new(move |_: Option<FollowUpStatus>| {
                                                    change_follow_up(list, query_client, visitor_id, previous, selected)
                                                })
                                            />
                                        </td>
                                        <td>
                                            <Show when=move || can_convert && can_manage()>
                                                <button
                                                    class="btn btn-secondary btn-sm"
                                                    on:click=move |_| convert(visitor_id, name.get_value())
                                                >
                                                    {icon("user-plus")}
                                                    " Tornar membro"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || !list.is_loading.get() && list.items.with(Vec::is_empty)>
                    <div class="empty-state">"Nenhum visitante encontrado"</div>
                </Show>
            </div>

            <PaginationControls pagination=list.pagination on_page_change=list.on_page_change() />
        </div>
    }
}
