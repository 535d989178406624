use crate::domain::common::{Address, Choice};
use serde::{Deserialize, Serialize};

// ============================================================================
// Subscription
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    Basic,
    Professional,
    Enterprise,
    Denomination,
}

impl Choice for SubscriptionPlan {
    fn all() -> &'static [Self] {
        &[
            Self::Basic,
            Self::Professional,
            Self::Enterprise,
            Self::Denomination,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
            Self::Denomination => "denomination",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Básico",
            Self::Professional => "Profissional",
            Self::Enterprise => "Empresarial",
            Self::Denomination => "Denominação",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Igreja: o tenant da plataforma
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Church {
    pub id: u64,
    #[serde(default)]
    pub denomination: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(default)]
    pub total_members: u32,
    #[serde(default)]
    pub total_visitors: u32,
    #[serde(default)]
    pub subscription_plan: Option<SubscriptionPlan>,
    #[serde(default)]
    pub is_active: bool,
}
