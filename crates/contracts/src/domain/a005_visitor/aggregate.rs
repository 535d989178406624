use crate::domain::common::Choice;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Etapa do funil de acompanhamento do visitante
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpStatus {
    #[default]
    Pending,
    Contacted,
    Interested,
    NotInterested,
    Converted,
}

impl Choice for FollowUpStatus {
    fn all() -> &'static [Self] {
        &[
            Self::Pending,
            Self::Contacted,
            Self::Interested,
            Self::NotInterested,
            Self::Converted,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Interested => "interested",
            Self::NotInterested => "not_interested",
            Self::Converted => "converted",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Contacted => "Contatado",
            Self::Interested => "Interessado",
            Self::NotInterested => "Sem interesse",
            Self::Converted => "Convertido",
        }
    }
}

/// Visitante registrado (manualmente ou pelo QR code da filial)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: u64,
    pub church: u64,
    #[serde(default)]
    pub branch: Option<u64>,
    #[serde(default)]
    pub branch_name: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub first_visit: Option<NaiveDate>,
    #[serde(default)]
    pub follow_up_status: FollowUpStatus,
    #[serde(default)]
    pub converted_to_member: bool,
    #[serde(default)]
    pub converted_member: Option<u64>,
    #[serde(default)]
    pub registration_source: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Visitor {
    /// Conversão só faz sentido para quem ainda não virou membro
    pub fn can_convert(&self) -> bool {
        !self.converted_to_member && self.follow_up_status != FollowUpStatus::NotInterested
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpUpdate {
    pub follow_up_status: FollowUpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Resposta de `convert_to_member`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResponse {
    #[serde(default)]
    pub message: String,
    pub member_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_defaults_and_conversion() {
        let json = r#"{"id": 3, "church": 1, "full_name": "Eva Lima", "follow_up_status": "interested"}"#;
        let v: Visitor = serde_json::from_str(json).unwrap();
        assert_eq!(v.follow_up_status, FollowUpStatus::Interested);
        assert!(v.can_convert());

        let json = r#"{"id": 4, "church": 1, "full_name": "Fábio", "follow_up_status": "converted", "converted_to_member": true}"#;
        let v: Visitor = serde_json::from_str(json).unwrap();
        assert!(!v.can_convert());
    }

    #[test]
    fn test_follow_up_wire_value() {
        let u = FollowUpUpdate {
            follow_up_status: FollowUpStatus::NotInterested,
            notes: None,
        };
        assert_eq!(
            serde_json::to_string(&u).unwrap(),
            r#"{"follow_up_status":"not_interested"}"#
        );
    }
}
