//! Tipos comuns a todos os agregados

pub mod choice;

pub use choice::Choice;

use serde::{Deserialize, Serialize};

/// Endereço no formato usado pelo backend (CEP sem máscara).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub complement: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl Address {
    /// "Cidade/UF" ou o que houver disponível.
    pub fn city_state(&self) -> String {
        match (self.city.trim(), self.state.trim()) {
            ("", "") => String::new(),
            (city, "") => city.to_string(),
            ("", state) => state.to_string(),
            (city, state) => format!("{}/{}", city, state),
        }
    }
}
