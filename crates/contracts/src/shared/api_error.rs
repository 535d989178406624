use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Corpo de erro devolvido pelo backend em respostas não-2xx.
///
/// O backend usa `error`, `detail` ou `message` dependendo do endpoint;
/// erros de validação de formulário chegam como `{ "campo": ["msg"] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Primeira mensagem não vazia, na ordem `error`, `detail`, `message`.
    pub fn message(&self) -> Option<&str> {
        [&self.error, &self.detail, &self.message]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .map(str::trim)
            .find(|m| !m.is_empty())
    }

    /// Extrai a mensagem de erro de um corpo de resposta bruto.
    ///
    /// Retorna `None` quando o corpo não é JSON ou não contém nenhuma mensagem
    /// reconhecível; nesse caso o chamador usa sua mensagem genérica.
    pub fn extract(text: &str) -> Option<String> {
        let value: Value = serde_json::from_str(text).ok()?;

        if let Ok(body) = serde_json::from_value::<ApiErrorBody>(value.clone()) {
            if let Some(msg) = body.message() {
                return Some(msg.to_string());
            }
        }

        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            Value::Array(items) => first_string(&items),
            Value::Object(map) => {
                // non_field_errors primeiro, depois o primeiro campo com mensagem
                if let Some(Value::Array(items)) = map.get("non_field_errors") {
                    if let Some(msg) = first_string(items) {
                        return Some(msg);
                    }
                }
                map.values().find_map(|v| match v {
                    Value::Array(items) => first_string(items),
                    Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                    _ => None,
                })
            }
            _ => None,
        }
    }

    /// Mensagem do backend ou `fallback` literal.
    pub fn message_or(text: &str, fallback: &str) -> String {
        Self::extract(text).unwrap_or_else(|| fallback.to_string())
    }
}

fn first_string(items: &[Value]) -> Option<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_error_then_detail() {
        let text = r#"{"detail":"Não autorizado","error":"Arquivo inválido"}"#;
        assert_eq!(ApiErrorBody::extract(text).as_deref(), Some("Arquivo inválido"));

        let text = r#"{"detail":"Token expirado"}"#;
        assert_eq!(ApiErrorBody::extract(text).as_deref(), Some("Token expirado"));
    }

    #[test]
    fn test_blank_error_falls_through() {
        let text = r#"{"error":"  ","message":"Falha no processamento"}"#;
        assert_eq!(
            ApiErrorBody::extract(text).as_deref(),
            Some("Falha no processamento")
        );
    }

    #[test]
    fn test_field_errors() {
        let text = r#"{"non_field_errors":["CPF já cadastrado"]}"#;
        assert_eq!(ApiErrorBody::extract(text).as_deref(), Some("CPF já cadastrado"));

        let text = r#"{"email":["Informe um e-mail válido."]}"#;
        assert_eq!(
            ApiErrorBody::extract(text).as_deref(),
            Some("Informe um e-mail válido.")
        );
    }

    #[test]
    fn test_non_json_uses_fallback() {
        let msg = ApiErrorBody::message_or("<html>502 Bad Gateway</html>", "Erro inesperado");
        assert_eq!(msg, "Erro inesperado");
        assert_eq!(ApiErrorBody::message_or("{}", "Erro inesperado"), "Erro inesperado");
    }
}
