/// Enum de escolhas do backend (valor wire + rótulo para a UI).
///
/// Usado para montar `<select>` e badges sem repetir tabelas de rótulos.
pub trait Choice: Sized + Copy + 'static {
    /// Todas as variantes, na ordem de exibição
    fn all() -> &'static [Self];

    /// Valor como o backend espera (snake_case)
    fn as_str(&self) -> &'static str;

    /// Rótulo em português
    fn label(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == value)
    }
}
