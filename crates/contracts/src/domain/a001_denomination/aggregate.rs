use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denominação: agrupamento de igrejas no topo da hierarquia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Denomination {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub headquarters_city: String,
    #[serde(default)]
    pub headquarters_state: String,
    #[serde(default)]
    pub total_churches: u32,
    #[serde(default)]
    pub total_members: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Denomination {
    pub fn display_name(&self) -> &str {
        if self.short_name.trim().is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }
}
