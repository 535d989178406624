//! Modelo de planilha para importação de membros

/// Colunas aceitas pelo backend, na ordem do modelo
pub const TEMPLATE_HEADERS: &[&str] = &[
    "nome_completo",
    "cpf",
    "data_nascimento",
    "genero",
    "email",
    "telefone",
    "cep",
    "endereco",
    "numero",
    "bairro",
    "cidade",
    "estado",
    "situacao",
    "funcao_ministerial",
    "data_membresia",
];

const EXAMPLE_ROW: &[&str] = &[
    "Maria da Silva",
    "12345678900",
    "15/03/1985",
    "F",
    "maria@email.com",
    "11987654321",
    "01001000",
    "Praça da Sé",
    "100",
    "Sé",
    "São Paulo",
    "SP",
    "active",
    "member",
    "10/01/2010",
];

pub const TEMPLATE_FILE_NAME: &str = "modelo_importacao_membros.csv";

/// Conteúdo do modelo: cabeçalho + uma linha de exemplo, separador `;`.
pub fn template_csv() -> String {
    let mut content = String::new();
    content.push_str(&TEMPLATE_HEADERS.join(";"));
    content.push('\n');
    content.push_str(&EXAMPLE_ROW.join(";"));
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        let csv = template_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(';').count(), TEMPLATE_HEADERS.len());
        assert_eq!(lines[1].split(';').count(), TEMPLATE_HEADERS.len());
        assert!(lines[0].starts_with("nome_completo;cpf"));
    }
}
