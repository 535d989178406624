use crate::shared::icons::icon;
use crate::shared::pagination::ResponsivePagination;
use leptos::prelude::*;

/// Controles de paginação responsivos.
///
/// Lê tudo de `pagination`; `on_page_change` recebe a página (1-based) depois
/// da navegação, para a listagem recarregar. Cliques fora do intervalo não
/// chamam nada.
#[component]
pub fn PaginationControls(
    pagination: ResponsivePagination,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let state = pagination.state;

    let navigate = move |apply: fn(&ResponsivePagination)| {
        let before = pagination.current_page();
        apply(&pagination);
        let after = pagination.current_page();
        if after != before {
            on_page_change.run(after);
        }
    };

    let summary = move || {
        let s = state.get();
        let (first, last) = s.item_range();
        if s.total_items == 0 {
            "Nenhum registro".to_string()
        } else {
            format!("Mostrando {}–{} de {}", first, last, s.total_items)
        }
    };

    view! {
        <Show when=move || state.with(|s| s.total_pages > 1) fallback=move || view! {
            <div class="pagination-controls pagination-controls--single">
                <span class="pagination-info">{summary}</span>
            </div>
        }>
            <div class="pagination-controls" class:pagination-controls--mobile=move || state.with(|s| s.is_mobile)>
                <span class="pagination-info">{summary}</span>
                <div class="pagination-buttons">
                    <button
                        class="pagination-btn"
                        on:click=move |_| navigate(ResponsivePagination::first_page)
                        disabled=move || !state.with(|s| s.has_previous())
                        title="Primeira página"
                    >
                        {icon("chevrons-left")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| navigate(ResponsivePagination::previous_page)
                        disabled=move || !state.with(|s| s.has_previous())
                        title="Página anterior"
                    >
                        {icon("chevron-left")}
                    </button>
                    {move || {
                        let s = state.get();
                        s.page_numbers()
                            .map(|page| {
                                let is_current = page == s.current_page;
                                view! {
                                    <button
                                        class="pagination-btn pagination-btn--number"
                                        class:pagination-btn--active=is_current
                                        aria-current=is_current.then_some("page")
                                        on:click=move |_| {
                                            if page != pagination.current_page() {
                                                pagination.go_to_page(page);
                                                if pagination.current_page() == page {
                                                    on_page_change.run(page);
                                                }
                                            }
                                        }
                                    >
                                        {page.to_string()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="pagination-btn"
                        on:click=move |_| navigate(ResponsivePagination::next_page)
                        disabled=move || !state.with(|s| s.has_next())
                        title="Próxima página"
                    >
                        {icon("chevron-right")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| navigate(ResponsivePagination::last_page)
                        disabled=move || !state.with(|s| s.has_next())
                        title="Última página"
                    >
                        {icon("chevrons-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
