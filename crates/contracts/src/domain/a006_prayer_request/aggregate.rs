use crate::domain::common::Choice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrayerCategory {
    Health,
    Family,
    Work,
    Spiritual,
    Financial,
    Gratitude,
    #[default]
    Other,
}

impl Choice for PrayerCategory {
    fn all() -> &'static [Self] {
        &[
            Self::Health,
            Self::Family,
            Self::Work,
            Self::Spiritual,
            Self::Financial,
            Self::Gratitude,
            Self::Other,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Family => "family",
            Self::Work => "work",
            Self::Spiritual => "spiritual",
            Self::Financial => "financial",
            Self::Gratitude => "gratitude",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Health => "Saúde",
            Self::Family => "Família",
            Self::Work => "Trabalho",
            Self::Spiritual => "Espiritual",
            Self::Financial => "Financeiro",
            Self::Gratitude => "Gratidão",
            Self::Other => "Outros",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrayerStatus {
    #[default]
    Active,
    Answered,
    Archived,
}

impl Choice for PrayerStatus {
    fn all() -> &'static [Self] {
        &[Self::Active, Self::Answered, Self::Archived]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Answered => "answered",
            Self::Archived => "archived",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Answered => "Respondido",
            Self::Archived => "Arquivado",
        }
    }
}

/// Pedido de oração
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerRequest {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: PrayerCategory,
    #[serde(default)]
    pub status: PrayerStatus,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub prayers_count: u32,
    /// O usuário atual já marcou "orei por isso"
    #[serde(default)]
    pub is_praying: bool,
    #[serde(default)]
    pub answer_testimony: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

impl PrayerRequest {
    pub fn author_display(&self) -> &str {
        if self.is_anonymous {
            return "Anônimo";
        }
        self.author_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Anônimo")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrayerRequestPayload {
    pub title: String,
    pub content: String,
    pub category: PrayerCategory,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkAnsweredPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_testimony: Option<String>,
}

/// Resposta de `pray`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayResponse {
    pub prayers_count: u32,
    #[serde(default)]
    pub is_praying: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_display() {
        let json = r#"{"id": 1, "title": "Cura", "is_anonymous": true, "author_name": "Gil"}"#;
        let p: PrayerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(p.author_display(), "Anônimo");

        let json = r#"{"id": 2, "title": "Emprego", "author_name": "Gil", "category": "work"}"#;
        let p: PrayerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(p.author_display(), "Gil");
        assert_eq!(p.category, PrayerCategory::Work);
        assert_eq!(p.status, PrayerStatus::Active);
    }
}
