use serde::{Deserialize, Serialize};

/// Números gerais da plataforma (painel do super admin)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformOverview {
    #[serde(default)]
    pub total_denominations: u32,
    #[serde(default)]
    pub total_churches: u32,
    #[serde(default)]
    pub active_churches: u32,
    #[serde(default)]
    pub total_branches: u32,
    #[serde(default)]
    pub total_members: u32,
    #[serde(default)]
    pub total_visitors: u32,
    #[serde(default)]
    pub active_users: u32,
    #[serde(default)]
    pub new_churches_this_month: u32,
    /// Crescimento de membros no mês, em %
    #[serde(default)]
    pub members_growth_percent: f64,
    #[serde(default)]
    pub monthly_revenue: f64,
}

impl PlatformOverview {
    /// Participação de igrejas ativas, em % (0 quando não há igrejas)
    pub fn active_churches_percent(&self) -> f64 {
        if self.total_churches == 0 {
            return 0.0;
        }
        self.active_churches as f64 * 100.0 / self.total_churches as f64
    }
}

/// Linha da tabela "Igrejas com mais membros"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopChurch {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub denomination_name: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub visitors_count: u32,
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub subscription_plan: Option<String>,
}

/// Parâmetros do ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopChurchesQuery {
    pub limit: usize,
    /// `members` | `visitors` | `growth`
    pub order_by: String,
}

impl Default for TopChurchesQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            order_by: "members".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_percent() {
        let o = PlatformOverview {
            total_churches: 8,
            active_churches: 6,
            ..Default::default()
        };
        assert_eq!(o.active_churches_percent(), 75.0);
        assert_eq!(PlatformOverview::default().active_churches_percent(), 0.0);
    }
}
