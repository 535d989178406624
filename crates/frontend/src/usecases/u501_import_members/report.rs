use contracts::usecases::u501_import_members::BulkImportResult;
use leptos::prelude::*;

/// "Linha 3: Telefone é obrigatório; CPF inválido"
fn error_line_text(line: usize, messages: &[String]) -> String {
    if messages.is_empty() {
        format!("Linha {}: erro não especificado", line)
    } else {
        format!("Linha {}: {}", line, messages.join("; "))
    }
}

/// Uma linha de texto por erro, na ordem em que o backend enviou
fn error_lines(result: &BulkImportResult) -> Vec<String> {
    result
        .errors
        .iter()
        .map(|e| error_line_text(e.line, &e.messages))
        .collect()
}

/// Resumo da importação com os erros por linha
#[component]
pub fn ImportReport(result: BulkImportResult) -> impl IntoView {
    let status_class = if result.is_complete_success() {
        "import-report import-report--success"
    } else if result.success_count > 0 {
        "import-report import-report--partial"
    } else {
        "import-report import-report--failed"
    };
    let errors = error_lines(&result);

    view! {
        <section class=status_class>
            <h3>"Resultado da importação"</h3>
            <ul class="import-report__summary">
                <li>"Linhas processadas: " <strong>{result.total_rows}</strong></li>
                <li>"Importados: " <strong>{result.success_count}</strong></li>
                <li>"Com erro: " <strong>{result.error_count}</strong></li>
                <li>"Duplicados ignorados: " <strong>{result.duplicates_skipped}</strong></li>
            </ul>
            {(!errors.is_empty()).then(|| view! {
                <div class="import-report__errors">
                    <h4>"Erros"</h4>
                    <ul>
                        {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_import_members::ImportError;

    #[test]
    fn test_error_lines_keep_backend_order() {
        let result = BulkImportResult {
            errors: vec![
                ImportError { line: 9, messages: vec!["CPF inválido".to_string()] },
                ImportError { line: 2, messages: vec![] },
            ],
            ..Default::default()
        };
        assert_eq!(
            error_lines(&result),
            vec!["Linha 9: CPF inválido".to_string(), "Linha 2: erro não especificado".to_string()]
        );
    }

    #[test]
    fn test_error_line_text() {
        assert_eq!(
            error_line_text(3, &["Telefone é obrigatório".to_string(), "CPF inválido".to_string()]),
            "Linha 3: Telefone é obrigatório; CPF inválido"
        );
        assert_eq!(error_line_text(7, &[]), "Linha 7: erro não especificado");
    }
}
