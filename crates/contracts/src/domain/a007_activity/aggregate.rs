use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ministério (departamento) da igreja
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ministry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub leader_name: Option<String>,
    #[serde(default)]
    pub total_members: u32,
    #[serde(default)]
    pub total_activities: u32,
    /// Cor hex usada nos cards (`#RRGGBB`)
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Atividade agendada de um ministério
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(default)]
    pub ministry: Option<u64>,
    #[serde(default)]
    pub ministry_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_datetime: DateTime<Utc>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub participants_count: u32,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub is_public: bool,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.max_participants
            .map(|max| self.participants_count >= max)
            .unwrap_or(false)
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_datetime > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_capacity() {
        let json = r#"{
            "id": 1, "name": "Culto de jovens",
            "start_datetime": "2024-03-02T22:00:00Z",
            "participants_count": 30, "max_participants": 30
        }"#;
        let a: Activity = serde_json::from_str(json).unwrap();
        assert!(a.is_full());
        let before: DateTime<Utc> = "2024-03-01T00:00:00Z".parse().unwrap();
        assert!(a.is_upcoming(before));
    }
}
