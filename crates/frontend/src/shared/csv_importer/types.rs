use serde::{Deserialize, Serialize};
use std::fmt;

/// Linha da pré-visualização: células na ordem do arquivo, sem conversão
pub type PreviewRow = Vec<String>;

/// Regras do seletor de arquivo da importação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Extensões aceitas, com ponto (`.csv`)
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: u64,
    /// Linhas exibidas na pré-visualização
    pub preview_lines: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec![".csv".to_string(), ".txt".to_string()],
            max_size_bytes: 5 * 1024 * 1024,
            preview_lines: 5,
        }
    }
}

impl UploadConfig {
    /// Valor do atributo `accept` do `<input type="file">`
    pub fn accept_attr(&self) -> String {
        self.allowed_extensions.join(",")
    }

    pub fn max_size_mb(&self) -> f64 {
        self.max_size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Erro de validação local; nada é enviado ao servidor
#[derive(Debug, Clone, PartialEq)]
pub enum FileValidationError {
    InvalidExtension { allowed: Vec<String> },
    TooLarge { max_size_bytes: u64 },
}

impl fmt::Display for FileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileValidationError::InvalidExtension { allowed } => {
                write!(f, "Formato inválido. Use arquivos: {}", allowed.join(", "))
            }
            FileValidationError::TooLarge { max_size_bytes } => {
                let mb = *max_size_bytes as f64 / (1024.0 * 1024.0);
                if mb.fract() == 0.0 {
                    write!(f, "Arquivo muito grande. Tamanho máximo: {}MB", mb as u64)
                } else {
                    write!(f, "Arquivo muito grande. Tamanho máximo: {:.1}MB", mb)
                }
            }
        }
    }
}

impl std::error::Error for FileValidationError {}

/// Extensão primeiro, depois tamanho
pub fn validate_file(
    file_name: &str,
    size_bytes: u64,
    config: &UploadConfig,
) -> Result<(), FileValidationError> {
    let name = file_name.to_lowercase();
    let extension_ok = config
        .allowed_extensions
        .iter()
        .any(|ext| name.ends_with(&ext.to_lowercase()));

    if !extension_ok {
        return Err(FileValidationError::InvalidExtension {
            allowed: config.allowed_extensions.clone(),
        });
    }

    if size_bytes > config.max_size_bytes {
        return Err(FileValidationError::TooLarge {
            max_size_bytes: config.max_size_bytes,
        });
    }

    Ok(())
}

/// Pré-visualização estrutural do arquivo.
///
/// Quebra em linhas, descarta linhas em branco, mantém as primeiras
/// `max_lines` e divide cada uma em `;` ou `,`. Nenhuma validação de
/// conteúdo: a primeira linha é só exibida como cabeçalho.
pub fn generate_preview(text: &str, max_lines: usize) -> Vec<PreviewRow> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .map(|line| line.split([';', ',']).map(str::to_string).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_pdf() {
        let err = validate_file("report.pdf", 1024, &UploadConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Formato inválido"));
        assert_eq!(err.to_string(), "Formato inválido. Use arquivos: .csv, .txt");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let config = UploadConfig::default();
        assert!(validate_file("MEMBROS.CSV", 10, &config).is_ok());
        assert!(validate_file("lista.txt", 10, &config).is_ok());
        assert!(validate_file("csv", 10, &config).is_err());
    }

    #[test]
    fn test_size_limit() {
        let config = UploadConfig::default();
        assert!(validate_file("a.csv", 5 * 1024 * 1024, &config).is_ok());
        let err = validate_file("a.csv", 5 * 1024 * 1024 + 1, &config).unwrap_err();
        assert_eq!(err.to_string(), "Arquivo muito grande. Tamanho máximo: 5MB");
    }

    #[test]
    fn test_extension_checked_before_size() {
        let err = validate_file("a.xlsx", u64::MAX, &UploadConfig::default()).unwrap_err();
        assert!(matches!(err, FileValidationError::InvalidExtension { .. }));
    }

    #[test]
    fn test_custom_config() {
        let config = UploadConfig {
            allowed_extensions: vec![".csv".to_string()],
            max_size_bytes: 1536 * 1024,
            preview_lines: 3,
        };
        assert!(validate_file("a.txt", 1, &config).is_err());
        let err = validate_file("a.csv", 2 * 1024 * 1024, &config).unwrap_err();
        assert_eq!(err.to_string(), "Arquivo muito grande. Tamanho máximo: 1.5MB");
        assert_eq!(config.accept_attr(), ".csv");
    }

    #[test]
    fn test_preview_splits_cells() {
        let rows = generate_preview("Nome;CPF\nAna;111\nBeto;222", 2);
        assert_eq!(
            rows,
            vec![
                vec!["Nome".to_string(), "CPF".to_string()],
                vec!["Ana".to_string(), "111".to_string()],
            ]
        );

        let rows = generate_preview("Nome;CPF\nAna;111\nBeto;222", 5);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec!["Beto".to_string(), "222".to_string()]);
    }

    #[test]
    fn test_preview_mixed_separators_and_blank_lines() {
        let text = "\r\nnome,email;telefone\r\n\r\n   \r\nCarla,c@x.com;119\r\n";
        let rows = generate_preview(text, 5);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["nome", "email", "telefone"]);
        assert_eq!(rows[1], vec!["Carla", "c@x.com", "119"]);
    }

    #[test]
    fn test_preview_limit() {
        let text: String = (1..=20).map(|i| format!("linha{};x\n", i)).collect();
        let rows = generate_preview(&text, UploadConfig::default().preview_lines);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4][0], "linha5");
    }

    #[test]
    fn test_preview_edge_cases() {
        assert!(generate_preview("", 5).is_empty());
        assert!(generate_preview("\n\n  \n", 5).is_empty());

        let rows = generate_preview("nome;cpf;email", 5);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);

        // células vazias são mantidas
        let rows = generate_preview("a;;b", 5);
        assert_eq!(rows[0], vec!["a", "", "b"]);
    }

    #[test]
    fn test_preview_keeps_duplicates() {
        let rows = generate_preview("Ana;111\nAna;111", 5);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }
}
