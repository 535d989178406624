//! Área de transferência (Clipboard API)

use wasm_bindgen_futures::{spawn_local, JsFuture};

pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("Falha ao copiar: {:?}", e))
}

/// Copia e chama `on_done` com o resultado (para feedback "Copiado!")
pub fn copy_with_feedback<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let result = write_text(&text).await;
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        on_done(result);
    });
}
