//! Títulos das abas por chave.

pub const DEFAULT_TAB: &str = "a004_member";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_platform_overview" => "Visão geral",
        "a003_branch" => "Filiais",
        "a004_member" => "Membros",
        "a005_visitor" => "Visitantes",
        "a006_prayer_request" => "Pedidos de oração",
        "a007_activity" => "Atividades",
        "u501_import_members" => "Importar membros",
        _ => "Página",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key(DEFAULT_TAB), "Membros");
        assert_eq!(tab_label_for_key("u501_import_members"), "Importar membros");
        assert_eq!(tab_label_for_key("desconhecida"), "Página");
    }
}
