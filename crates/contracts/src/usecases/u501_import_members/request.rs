use serde::{Deserialize, Serialize};

/// Parâmetros do upload multipart de importação de membros.
///
/// O arquivo segue no campo `file`; estes campos acompanham como texto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Filial de destino; sem filial os membros vão para a sede
    pub branch_id: Option<u64>,
    pub skip_duplicates: bool,
}

impl ImportOptions {
    /// Campos de formulário na ordem em que o backend os documenta
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(2);
        if let Some(branch_id) = self.branch_id {
            fields.push(("branch_id", branch_id.to_string()));
        }
        fields.push(("skip_duplicates", self.skip_duplicates.to_string()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_without_branch() {
        let opts = ImportOptions {
            branch_id: None,
            skip_duplicates: true,
        };
        assert_eq!(opts.form_fields(), vec![("skip_duplicates", "true".to_string())]);
    }

    #[test]
    fn test_form_fields_with_branch() {
        let opts = ImportOptions {
            branch_id: Some(42),
            skip_duplicates: false,
        };
        assert_eq!(
            opts.form_fields(),
            vec![
                ("branch_id", "42".to_string()),
                ("skip_duplicates", "false".to_string()),
            ]
        );
    }
}
