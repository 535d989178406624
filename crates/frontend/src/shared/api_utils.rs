//! Helpers HTTP para o backend REST.
//!
//! Todas as chamadas levam o token de acesso quando há sessão e devolvem
//! `Result<T, String>`; a string de erro é a mensagem do backend quando ela
//! existe, senão `HTTP {status}`.

use super::config::app_config;
use crate::system::auth::storage;
use contracts::shared::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base do backend: esquema e host da página atual, porta da configuração.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, app_config().api_port)
}

/// `path` relativo ao prefixo versionado, ex.: `api_url("/members/")`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), &app_config().api_prefix, path)
}

fn join_url(base: &str, prefix: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        prefix.trim_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `url?query` com a query serializada por serde_qs
pub fn with_query<Q: Serialize>(url: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    if qs.is_empty() {
        Ok(url.to_string())
    } else {
        Ok(format!("{}?{}", url, qs))
    }
}

/// Token de acesso e igreja ativa (tenant) nos cabeçalhos
pub fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    };
    match storage::get_active_church() {
        Some(church_id) => builder.header("X-Church-Id", &church_id.to_string()),
        None => builder,
    }
}

/// Converte resposta não-2xx na mensagem do backend
pub async fn error_from_response(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = ApiErrorBody::message_or(&body, &format!("HTTP {}", status));
    log::warn!("API {} -> {}: {}", response.url(), status, message);
    message
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = authorized(Request::get(url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = authorized(Request::post(url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = authorized(Request::patch(url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// POST sem corpo (ações tipo `/pray/`, `/mark_all_read/`)
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = authorized(Request::post(url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn delete(url: &str) -> Result<(), String> {
    let response = authorized(Request::delete(url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// GET de conteúdo binário (exportações)
pub async fn get_bytes(url: &str) -> Result<Vec<u8>, String> {
    let response = authorized(Request::get(url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/v1", "/members/"),
            "http://localhost:8000/api/v1/members/"
        );
        assert_eq!(
            join_url("http://h:1/", "api/v1/", "members/import_csv/"),
            "http://h:1/api/v1/members/import_csv/"
        );
    }
}
