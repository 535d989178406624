pub mod state;

use self::state::create_state;
use crate::domain::a004_member::api;
use crate::domain::a004_member::ui::form::MemberForm;
use crate::shared::components::{ChoiceBadge, ChoiceSelect, PageHeader, PaginationControls};
use crate::shared::export::download_bytes;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::masks::{cpf_mask, phone_mask};
use crate::shared::paged_list::use_paged_list;
use crate::shared::query_cache::use_query_client;
use crate::system::auth::use_auth;
use contracts::domain::a004_member::{Member, MembershipStatus};
use contracts::domain::common::Choice;
use contracts::shared::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[derive(Clone, Debug, PartialEq)]
pub struct MemberRow {
    pub id: u64,
    pub full_name: String,
    pub cpf: String,
    pub phone: String,
    pub branch: String,
    pub status: MembershipStatus,
    pub function: &'static str,
    pub age: Option<u32>,
}

impl MemberRow {
    fn from_member(m: Member, today: chrono::NaiveDate) -> Self {
        Self {
            id: m.id,
            age: m.age_at(today),
            cpf: cpf_mask(&m.cpf),
            phone: phone_mask(&m.phone),
            branch: m.branch_name.unwrap_or_else(|| "Sede".to_string()),
            status: m.membership_status,
            function: m.ministerial_function.label(),
            full_name: m.full_name,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MembersList() -> impl IntoView {
    let state = create_state();
    let query_client = use_query_client();
    let (auth_state, _) = use_auth();
    let can_manage = move || auth_state.with(|s| s.role().can_manage_members());

    let list = use_paged_list(
        api::RESOURCE,
        move |page, page_size| state.with_untracked(|s| s.to_query(page, page_size)),
        |query: ListQuery| async move { api::list_members(&query).await },
    );
    let pagination = list.pagination;

    let (is_exporting, set_is_exporting) = signal(false);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<u64>::None);
    let status_filter = RwSignal::new(Option::<MembershipStatus>::None);

    // filtros mudaram: volta à página 1 (também faz a carga inicial)
    Effect::new(move |_| {
        state.track();
        list.reload_first();
    });

    let rows = move || {
        let today = chrono::Local::now().date_naive();
        list.items
            .get()
            .into_iter()
            .map(|m| MemberRow::from_member(m, today))
            .collect::<Vec<_>>()
    };

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.search = text);
    });

    let on_status = Callback::new(move |status: Option<MembershipStatus>| {
        state.update(|s| s.status = status);
    });

    let export = move |_| {
        let query = state.with_untracked(|s| s.to_query(1, pagination.page_size()));
        set_is_exporting.set(true);
        spawn_local(async move {
            let result = api::export_members(&query)
                .await
                .and_then(|bytes| download_bytes(&bytes, "membros.csv", "text/csv;charset=utf-8;"));
            if let Err(e) = result {
                list.error.set(Some(e));
            }
            set_is_exporting.set(false);
        });
    };

    let on_saved = Callback::new(move |member: Member| {
        log::info!("membro {} salvo", member.id);
        show_form.set(false);
        editing.set(None);
        query_client.invalidate(api::RESOURCE);
        list.reload_current();
    });

    let close_form = Callback::new(move |_: ()| {
        show_form.set(false);
        editing.set(None);
    });

    let edit = move |id: u64| {
        editing.set(Some(id));
        show_form.set(true);
    };

    let remove = move |row: MemberRow| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Excluir {}?", row.full_name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_member(row.id).await {
                Ok(()) => {
                    query_client.invalidate(api::RESOURCE);
                    list.reload_after_delete();
                }
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Membros" icon_name="users" subtitle=Signal::derive(move || {
                let total = pagination.state.with(|s| s.total_items);
                Some(format!("{} cadastrados", total))
            })>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=export
                    disabled=is_exporting
                >
                    {icon("download")}
                    {move || if is_exporting.get() { " Exportando..." } else { " Exportar" }}
                </Button>
                <Show when=can_manage>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            editing.set(None);
                            show_form.set(true);
                        }
                    >
                        {icon("user-plus")}
                        " Novo membro"
                    </Button>
                </Show>
            </PageHeader>

            // recriado quando muda o membro em edição
            {move || show_form.get().then(|| {
                let member_id = editing.get();
                view! { <MemberForm member_id=member_id on_saved=on_saved on_cancel=close_form /> }
            })}

            <div class="filter-bar">
                <SearchInput on_change=on_search placeholder="Buscar por nome, CPF ou e-mail" />
                <ChoiceSelect value=status_filter all_label="Todas as situações" on_change=on_status />
            </div>

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
                            <th class="hide-mobile">"CPF"</th>
                            <th>"Telefone"</th>
                            <th class="hide-mobile">"Filial"</th>
                            <th>"Situação"</th>
                            <th class="hide-mobile">"Função"</th>
                            <th class="hide-mobile">"Idade"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| row.id
                            children=move |row: MemberRow| {
                                let search = state.with_untracked(|s| s.search.clone());
                                let row_id = row.id;
                                let row_for_delete = StoredValue::new(row.clone());
                                view! {
                                    <tr>
                                        <td>{highlight_matches(&row.full_name, &search)}</td>
                                        <td class="hide-mobile">{row.cpf}</td>
                                        <td>{row.phone}</td>
                                        <td class="hide-mobile">{row.branch}</td>
                                        <td><ChoiceBadge choice=row.status /></td>
                                        <td class="hide-mobile">{row.function}</td>
                                        <td class="hide-mobile">
                                            {row.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>
                                            <Show when=can_manage>
                                                <button
                                                    class="icon-btn"
                                                    title="Editar"
                                                    on:click=move |_| edit(row_id)
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    title="Excluir"
                                                    on:click=move |_| remove(row_for_delete.get_value())
                                                >
                                                    {icon("x")}
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
                    <div class="empty-state">"Nenhum membro encontrado"</div>
                </Show>
            </div>

            <PaginationControls pagination=pagination on_page_change=list.on_page_change() />
        </div>
    }
}
