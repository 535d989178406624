use super::types::{validate_file, PreviewRow, UploadConfig};
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Seletor de arquivo CSV com arrastar-e-soltar.
///
/// Valida extensão e tamanho localmente; só chama `on_file_select` quando o
/// arquivo passa. O erro fica visível até a próxima seleção.
#[component]
pub fn CsvUploader(
    /// Chamado com o arquivo já validado
    on_file_select: Callback<web_sys::File>,
    #[prop(optional)]
    config: Option<UploadConfig>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// id do `<input>`; único por página
    #[prop(optional, into)]
    input_id: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let accept = config.accept_attr();
    let hint = format!(
        "Formatos aceitos: {} · máximo {}MB",
        config.allowed_extensions.join(", "),
        config.max_size_mb()
    );
    let config = StoredValue::new(config);
    let input_id = input_id.unwrap_or_else(|| "csv-file-input".to_string());

    let (error, set_error) = signal(Option::<String>::None);
    let (selected, set_selected) = signal(Option::<(String, f64)>::None);
    let (is_dragging, set_is_dragging) = signal(false);

    let handle_file = move |file: web_sys::File| {
        let name = file.name();
        let size = file.size();
        match config.with_value(|c| validate_file(&name, size as u64, c)) {
            Ok(()) => {
                set_error.set(None);
                set_selected.set(Some((name, size)));
                on_file_select.run(file);
            }
            Err(e) => {
                log::warn!("arquivo rejeitado: {} ({})", name, e);
                set_selected.set(None);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
            // permite selecionar o mesmo arquivo de novo
            input.set_value("");
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if disabled.get_untracked() {
            return;
        }
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let input_id_for_label = input_id.clone();

    view! {
        <div class="csv-uploader">
            <div
                class="csv-uploader__dropzone"
                class:csv-uploader__dropzone--active=move || is_dragging.get()
                class:csv-uploader__dropzone--disabled=move || disabled.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_dragging.set(true);
                }
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=on_drop
            >
                {icon("upload")}
                <p class="csv-uploader__title">"Arraste o arquivo aqui ou"</p>
                <label class="button button--primary" for=input_id_for_label>
                    {icon("file")}
                    " Selecionar arquivo"
                </label>
                <input
                    id=input_id
                    type="file"
                    accept=accept
                    class="hidden"
                    disabled=move || disabled.get()
                    on:change=on_change
                />
                <p class="csv-uploader__hint">{hint}</p>
            </div>

            {move || selected.get().map(|(name, size)| view! {
                <div class="csv-uploader__fileinfo">
                    {icon("file-text")}
                    <strong>{name}</strong>
                    {format!(" ({:.2} KB)", size / 1024.0)}
                </div>
            })}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
        </div>
    }
}

/// Tabela de pré-visualização; a primeira linha vira cabeçalho.
/// Não renderiza nada quando não há linhas.
#[component]
pub fn CsvPreviewTable(#[prop(into)] rows: Signal<Vec<PreviewRow>>) -> impl IntoView {
    move || {
        let rows = rows.get();
        let mut iter = rows.into_iter();
        let header = iter.next()?;
        let body: Vec<PreviewRow> = iter.collect();

        Some(view! {
            <div class="table-container csv-preview">
                <table class="data-table">
                    <thead>
                        <tr>
                            {header.into_iter().map(|cell| view! { <th>{cell}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {body.into_iter().map(|row| view! {
                            <tr>
                                {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        })
    }
}
