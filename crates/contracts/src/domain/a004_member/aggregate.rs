use crate::domain::common::{Address, Choice};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Choices
// ============================================================================

/// Situação do membro no rol da igreja
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    #[default]
    Active,
    Inactive,
    Transferred,
    Deceased,
}

impl Choice for MembershipStatus {
    fn all() -> &'static [Self] {
        &[Self::Active, Self::Inactive, Self::Transferred, Self::Deceased]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Transferred => "transferred",
            Self::Deceased => "deceased",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Transferred => "Transferido",
            Self::Deceased => "Falecido",
        }
    }
}

/// Função ministerial (rótulo eclesiástico, não é papel de permissão)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinisterialFunction {
    #[default]
    Member,
    Cooperator,
    Deacon,
    Deaconess,
    Presbyter,
    Evangelist,
    Missionary,
    Pastor,
    Leader,
}

impl Choice for MinisterialFunction {
    fn all() -> &'static [Self] {
        &[
            Self::Member,
            Self::Cooperator,
            Self::Deacon,
            Self::Deaconess,
            Self::Presbyter,
            Self::Evangelist,
            Self::Missionary,
            Self::Pastor,
            Self::Leader,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Cooperator => "cooperator",
            Self::Deacon => "deacon",
            Self::Deaconess => "deaconess",
            Self::Presbyter => "presbyter",
            Self::Evangelist => "evangelist",
            Self::Missionary => "missionary",
            Self::Pastor => "pastor",
            Self::Leader => "leader",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Member => "Membro",
            Self::Cooperator => "Cooperador",
            Self::Deacon => "Diácono",
            Self::Deaconess => "Diaconisa",
            Self::Presbyter => "Presbítero",
            Self::Evangelist => "Evangelista",
            Self::Missionary => "Missionário",
            Self::Pastor => "Pastor",
            Self::Leader => "Líder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Membro da igreja
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub church: u64,
    #[serde(default)]
    pub branch: Option<u64>,
    #[serde(default)]
    pub branch_name: Option<String>,
    pub full_name: String,
    /// Somente dígitos
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub email: String,
    /// Somente dígitos
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(default)]
    pub membership_status: MembershipStatus,
    #[serde(default)]
    pub ministerial_function: MinisterialFunction,
    #[serde(default)]
    pub membership_date: Option<NaiveDate>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Member {
    /// Idade completa em `today`, se a data de nascimento for conhecida
    pub fn age_at(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|b| today.years_since(b))
    }
}

/// Payload de criação/edição. CPF, telefone e CEP vão sem máscara.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberPayload {
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cpf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zipcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<u64>,
    pub membership_status: MembershipStatus,
    pub ministerial_function: MinisterialFunction,
}

impl MemberPayload {
    /// Validação mínima antes de enviar; o backend continua sendo a autoridade.
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Nome completo é obrigatório".to_string());
        }
        if !self.cpf.is_empty() && self.cpf.len() != 11 {
            return Err("CPF deve ter 11 dígitos".to_string());
        }
        if !self.phone.is_empty() && !(10..=11).contains(&self.phone.len()) {
            return Err("Telefone deve ter 10 ou 11 dígitos".to_string());
        }
        if !self.zipcode.is_empty() && self.zipcode.len() != 8 {
            return Err("CEP deve ter 8 dígitos".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_minimal_json() {
        let json = r#"{"id": 10, "church": 1, "full_name": "Ana Souza"}"#;
        let m: Member = serde_json::from_str(json).unwrap();
        assert_eq!(m.membership_status, MembershipStatus::Active);
        assert_eq!(m.ministerial_function, MinisterialFunction::Member);
        assert!(m.branch.is_none());
        assert!(m.birth_date.is_none());
    }

    #[test]
    fn test_member_age() {
        let json = r#"{"id": 1, "church": 1, "full_name": "Beto", "birth_date": "1990-06-15", "gender": "M"}"#;
        let m: Member = serde_json::from_str(json).unwrap();
        assert_eq!(m.gender, Some(Gender::Male));
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(m.age_at(today), Some(33));
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(m.age_at(today), Some(34));
    }

    #[test]
    fn test_status_choice_roundtrip_labels() {
        assert_eq!(MembershipStatus::parse("transferred"), Some(MembershipStatus::Transferred));
        assert_eq!(MembershipStatus::parse("unknown"), None);
        assert_eq!(MinisterialFunction::Deaconess.label(), "Diaconisa");
    }

    #[test]
    fn test_payload_validation() {
        let mut p = MemberPayload {
            full_name: "Carla Dias".into(),
            cpf: "12345678900".into(),
            phone: "11987654321".into(),
            ..Default::default()
        };
        assert!(p.validate().is_ok());

        p.cpf = "123".into();
        assert_eq!(p.validate().unwrap_err(), "CPF deve ter 11 dígitos");

        p.cpf.clear();
        p.full_name = "  ".into();
        assert_eq!(p.validate().unwrap_err(), "Nome completo é obrigatório");
    }

    #[test]
    fn test_payload_skips_empty_fields() {
        let p = MemberPayload {
            full_name: "Davi".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("cpf").is_none());
        assert_eq!(json["membership_status"], "active");
    }
}
