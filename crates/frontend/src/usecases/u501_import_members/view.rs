use super::api;
use super::report::ImportReport;
use crate::domain::a003_branch::api as branch_api;
use crate::domain::a004_member::api as member_api;
use crate::shared::components::PageHeader;
use crate::shared::config::app_config;
use crate::shared::csv_importer::parser::read_file_text;
use crate::shared::csv_importer::{generate_preview, CsvPreviewTable, CsvUploader, PreviewRow};
use crate::shared::export::download_csv_text;
use crate::shared::icons::icon;
use crate::shared::query_cache::use_query_client;
use contracts::domain::a003_branch::Branch;
use contracts::usecases::u501_import_members::template::{template_csv, TEMPLATE_FILE_NAME};
use contracts::usecases::u501_import_members::{BulkImportResult, ImportOptions};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Importação de membros por CSV: escolher arquivo, conferir as primeiras
/// linhas, definir filial e duplicados, enviar.
#[component]
pub fn ImportMembersPage() -> impl IntoView {
    let config = app_config().upload;
    let preview_lines = config.preview_lines;
    let query_client = use_query_client();

    let file = StoredValue::new_local(Option::<web_sys::File>::None);
    let (has_file, set_has_file) = signal(false);
    let (preview, set_preview) = signal(Vec::<PreviewRow>::new());
    let branches = RwSignal::new(Vec::<Branch>::new());
    let (branch_id, set_branch_id) = signal(Option::<u64>::None);
    let (skip_duplicates, set_skip_duplicates) = signal(true);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (result, set_result) = signal(Option::<BulkImportResult>::None);

    spawn_local(async move {
        match branch_api::list_branches().await {
            Ok(page) => branches.set(page.results),
            Err(e) => log::warn!("filiais indisponíveis: {}", e),
        }
    });

    let on_file_select = Callback::new(move |selected: web_sys::File| {
        set_result.set(None);
        set_error.set(None);
        set_preview.set(Vec::new());
        file.set_value(Some(selected.clone()));
        set_has_file.set(true);

        spawn_local(async move {
            match read_file_text(&selected).await {
                Ok(text) => set_preview.set(generate_preview(&text, preview_lines)),
                Err(e) => {
                    log::warn!("pré-visualização: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let download_template = move |_| {
        if let Err(e) = download_csv_text(&template_csv(), TEMPLATE_FILE_NAME) {
            set_error.set(Some(e));
        }
    };

    let submit = move |_| {
        let Some(selected) = file.get_value() else {
            set_error.set(Some("Selecione um arquivo".to_string()));
            return;
        };
        let options = ImportOptions {
            branch_id: branch_id.get_untracked(),
            skip_duplicates: skip_duplicates.get_untracked(),
        };
        set_is_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::import_members_csv(&selected, &options).await {
                Ok(r) => {
                    log::info!(
                        "importação: {} de {} linhas, {} erros",
                        r.success_count,
                        r.total_rows,
                        r.error_count
                    );
                    if r.success_count > 0 {
                        query_client.invalidate(member_api::RESOURCE);
                    }
                    set_result.set(Some(r));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page import-page">
            <PageHeader title="Importar membros" icon_name="upload" subtitle="Cadastro em lote a partir de planilha CSV">
                <Button appearance=ButtonAppearance::Secondary on_click=download_template>
                    {icon("download")}
                    " Baixar modelo"
                </Button>
            </PageHeader>

            <CsvUploader
                on_file_select=on_file_select
                config=config
                disabled=Signal::derive(move || is_submitting.get())
                input_id="member-import-file"
            />

            <Show when=move || !preview.with(Vec::is_empty)>
                <h3>"Pré-visualização"</h3>
                <CsvPreviewTable rows=preview />
            </Show>

            <div class="import-options">
                <div class="form-group">
                    <label for="import-branch">"Filial de destino"</label>
                    <select
                        id="import-branch"
                        class="form-select"
                        on:change=move |ev| set_branch_id.set(event_target_value(&ev).parse::<u64>().ok())
                    >
                        <option value="">"Sede"</option>
                        <For
                            each=move || branches.get()
                            key=|b| b.id
                            children=|b| view! { <option value=b.id.to_string()>{b.name}</option> }
                        />
                    </select>
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || skip_duplicates.get()
                        on:change=move |ev| set_skip_duplicates.set(event_target_checked(&ev))
                    />
                    " Ignorar membros já cadastrados (mesmo CPF ou e-mail)"
                </label>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Button
                appearance=ButtonAppearance::Primary
                on_click=submit
                disabled=Signal::derive(move || !has_file.get() || is_submitting.get())
            >
                {move || if is_submitting.get() { "Importando..." } else { "Importar" }}
            </Button>

            {move || result.get().map(|r| view! { <ImportReport result=r /> })}
        </div>
    }
}
