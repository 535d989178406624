use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirm {
    pub token: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

impl PasswordResetConfirm {
    pub fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("Link de redefinição inválido".to_string());
        }
        if self.new_password.chars().count() < 8 {
            return Err("A senha deve ter pelo menos 8 caracteres".to_string());
        }
        if self.new_password != self.new_password_confirm {
            return Err("As senhas não coincidem".to_string());
        }
        Ok(())
    }
}

/// Resposta genérica `{ "message": ... }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Papel de acesso do usuário no sistema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    DenominationAdmin,
    ChurchAdmin,
    Pastor,
    Secretary,
    Leader,
    Member,
    #[default]
    ReadOnly,
}

impl UserRole {
    pub fn is_platform_admin(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    pub fn can_manage_members(self) -> bool {
        matches!(
            self,
            Self::SuperAdmin
                | Self::DenominationAdmin
                | Self::ChurchAdmin
                | Self::Pastor
                | Self::Secretary
        )
    }

    pub fn can_manage_visitors(self) -> bool {
        self.can_manage_members() || matches!(self, Self::Leader)
    }

    pub fn can_manage_branches(self) -> bool {
        matches!(
            self,
            Self::SuperAdmin | Self::DenominationAdmin | Self::ChurchAdmin
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::DenominationAdmin => "Admin da Denominação",
            Self::ChurchAdmin => "Admin da Igreja",
            Self::Pastor => "Pastor",
            Self::Secretary => "Secretário(a)",
            Self::Leader => "Líder",
            Self::Member => "Membro",
            Self::ReadOnly => "Somente leitura",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub email: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    /// Igreja ativa do usuário (None para super admin sem igreja)
    #[serde(default)]
    pub church_id: Option<u64>,
    #[serde(default)]
    pub church_name: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert!(UserRole::SuperAdmin.is_platform_admin());
        assert!(!UserRole::ChurchAdmin.is_platform_admin());
        assert!(UserRole::Secretary.can_manage_members());
        assert!(!UserRole::Leader.can_manage_members());
        assert!(UserRole::Leader.can_manage_visitors());
        assert!(!UserRole::Member.can_manage_visitors());
        assert!(!UserRole::Pastor.can_manage_branches());
    }

    #[test]
    fn test_user_info_defaults() {
        let json = r#"{"id": 1, "email": "ana@igreja.org", "full_name": null}"#;
        let u: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(u.role, UserRole::ReadOnly);
        assert_eq!(u.display_name(), "ana@igreja.org");
    }

    #[test]
    fn test_password_reset_validation() {
        let mut c = PasswordResetConfirm {
            token: "abc".into(),
            new_password: "segredo123".into(),
            new_password_confirm: "segredo123".into(),
        };
        assert!(c.validate().is_ok());
        c.new_password_confirm = "outra123".into();
        assert_eq!(c.validate().unwrap_err(), "As senhas não coincidem");
        c.new_password = "curta".into();
        assert_eq!(
            c.validate().unwrap_err(),
            "A senha deve ter pelo menos 8 caracteres"
        );
    }
}
