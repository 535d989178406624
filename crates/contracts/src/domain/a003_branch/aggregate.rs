use crate::domain::common::Address;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filial (congregação) de uma igreja, com o QR code de cadastro de visitantes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: u64,
    pub church: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(default)]
    pub is_main: bool,
    pub qr_code_uuid: Option<Uuid>,
    /// URL absoluta da imagem PNG do QR code
    #[serde(default)]
    pub qr_code_image: Option<String>,
    #[serde(default)]
    pub visitor_registration_url: String,
    #[serde(default)]
    pub qr_code_active: bool,
    #[serde(default)]
    pub total_visitors_registered: u32,
}

impl Branch {
    pub fn has_qr_code(&self) -> bool {
        self.qr_code_uuid.is_some() && self.qr_code_image.is_some()
    }

    /// Nome de arquivo para download da imagem do QR code
    pub fn qr_file_name(&self) -> String {
        let slug: String = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let slug = slug
            .split('-')
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("qrcode-{}.png", if slug.is_empty() { "filial".to_string() } else { slug })
    }
}

/// Resposta de `toggle_qr_code` / `regenerate_qr_code`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeActionResponse {
    #[serde(default)]
    pub message: String,
    pub data: Branch,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(name: &str) -> Branch {
        Branch {
            id: 1,
            church: 1,
            name: name.to_string(),
            short_name: String::new(),
            address: Address::default(),
            is_main: false,
            qr_code_uuid: None,
            qr_code_image: None,
            visitor_registration_url: String::new(),
            qr_code_active: false,
            total_visitors_registered: 0,
        }
    }

    #[test]
    fn test_qr_file_name() {
        assert_eq!(branch("Sede Central").qr_file_name(), "qrcode-sede-central.png");
        assert_eq!(branch("Congregação  Vila Nova!").qr_file_name(), "qrcode-congrega-o-vila-nova.png");
        assert_eq!(branch("***").qr_file_name(), "qrcode-filial.png");
    }

    #[test]
    fn test_deserialize_with_flat_address() {
        let json = r#"{
            "id": 7, "church": 2, "name": "Filial Norte",
            "city": "Recife", "state": "PE", "zipcode": "50000000",
            "qr_code_uuid": "6f1c1c38-2a43-4b5e-9a9e-2f3c1d0e8b11",
            "qr_code_image": "https://cdn.example/qr/7.png",
            "visitor_registration_url": "https://app.example/visitante/6f1c",
            "qr_code_active": true
        }"#;
        let b: Branch = serde_json::from_str(json).unwrap();
        assert_eq!(b.address.city_state(), "Recife/PE");
        assert!(b.has_qr_code());
        assert!(b.qr_code_active);
        assert_eq!(b.total_visitors_registered, 0);
    }
}
