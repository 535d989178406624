use wasm_bindgen_futures::JsFuture;

/// Lê o arquivo inteiro como texto (UTF-8) sem ida ao servidor
pub async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Erro ao ler arquivo: {:?}", e))?;

    text.as_string()
        .ok_or_else(|| "Conteúdo do arquivo não é texto".to_string())
}
