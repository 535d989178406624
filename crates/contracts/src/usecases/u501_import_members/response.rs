use serde::{Deserialize, Serialize};

/// Erro de uma linha do arquivo importado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportError {
    /// Número da linha no arquivo (o cabeçalho é a linha 1)
    pub line: usize,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Resumo devolvido pelo backend ao final da importação.
///
/// Erros por linha são dados, não falha da requisição: uma importação
/// parcialmente bem-sucedida chega com status 200/201.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkImportResult {
    #[serde(default)]
    pub total_rows: usize,
    #[serde(default)]
    pub success_count: usize,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub duplicates_skipped: usize,
    #[serde(default)]
    pub errors: Vec<ImportError>,
    #[serde(default)]
    pub created_members: Vec<u64>,
    #[serde(default)]
    pub branch_id: Option<u64>,
}

impl BulkImportResult {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0 || !self.errors.is_empty()
    }

    pub fn is_complete_success(&self) -> bool {
        !self.has_errors() && self.success_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_result_with_missing_fields() {
        let json = r#"{
            "total_rows": 3,
            "success_count": 2,
            "error_count": 1,
            "errors": [{"line": 3, "messages": ["Telefone é obrigatório"]}]
        }"#;
        let r: BulkImportResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.duplicates_skipped, 0);
        assert!(r.created_members.is_empty());
        assert!(r.branch_id.is_none());
        assert!(r.has_errors());
        assert!(!r.is_complete_success());
        assert_eq!(r.errors[0].line, 3);
        assert_eq!(r.errors[0].messages, vec!["Telefone é obrigatório".to_string()]);
    }

    #[test]
    fn test_complete_success() {
        let r = BulkImportResult {
            total_rows: 2,
            success_count: 2,
            created_members: vec![101, 102],
            branch_id: Some(5),
            ..Default::default()
        };
        assert!(r.is_complete_success());
    }
}
