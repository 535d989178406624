//! Configuração do cliente.
//!
//! Valores padrão embutidos; um JSON parcial em `localStorage["obreiro_config"]`
//! sobrescreve só os campos presentes.

use super::csv_importer::UploadConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_STORAGE_KEY: &str = "obreiro_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Porta do backend; o host vem de `window.location`
    pub api_port: u16,
    pub api_prefix: String,
    pub upload: UploadConfig,
    pub stale_time_ms: f64,
    pub search_debounce_ms: u32,
    pub notification_poll_ms: u32,
    pub mobile_breakpoint_px: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: 8000,
            api_prefix: "/api/v1".to_string(),
            upload: UploadConfig::default(),
            stale_time_ms: 5.0 * 60.0 * 1000.0,
            search_debounce_ms: 400,
            notification_poll_ms: 60_000,
            mobile_breakpoint_px: 768.0,
        }
    }
}

impl AppConfig {
    /// JSON inválido cai nos padrões
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{} inválido, usando padrões: {}", CONFIG_STORAGE_KEY, e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        match stored {
            Some(json) => Self::from_json(&json),
            None => Self::default(),
        }
    }
}

thread_local! {
    static CONFIG: AppConfig = AppConfig::load();
}

/// Configuração carregada uma vez por sessão
pub fn app_config() -> AppConfig {
    CONFIG.with(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AppConfig::default();
        assert_eq!(c.api_prefix, "/api/v1");
        assert_eq!(c.stale_time_ms, 300_000.0);
        assert_eq!(c.search_debounce_ms, 400);
        assert_eq!(c.notification_poll_ms, 60_000);
        assert_eq!(c.upload.max_size_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_partial_override() {
        let c = AppConfig::from_json(r#"{"api_port": 9000, "upload": {"preview_lines": 10}}"#);
        assert_eq!(c.api_port, 9000);
        assert_eq!(c.upload.preview_lines, 10);
        assert_eq!(c.upload.allowed_extensions, vec![".csv", ".txt"]);
        assert_eq!(c.search_debounce_ms, 400);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(AppConfig::from_json("{nope"), AppConfig::default());
    }
}
