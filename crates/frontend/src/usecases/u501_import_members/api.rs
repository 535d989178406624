use contracts::usecases::u501_import_members::{BulkImportResult, ImportOptions};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::{api_url, authorized, error_from_response};

/// Envia o CSV como multipart (`file` + opções).
///
/// Erros por linha voltam dentro do `BulkImportResult`; `Err` só para falha
/// de transporte ou resposta não-2xx.
pub async fn import_members_csv(
    file: &web_sys::File,
    options: &ImportOptions,
) -> Result<BulkImportResult, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    for (name, value) in options.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| format!("Failed to set {}: {:?}", name, e))?;
    }

    // sem Content-Type explícito: o navegador define o boundary
    let response = authorized(Request::post(&api_url("/members/import_csv/")))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<BulkImportResult>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
