use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Vendor,
    Customer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Администратор",
            UserRole::Vendor => "Продавец",
            UserRole::Customer => "Покупатель",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
    pub concurrency_stamp: String,
}

impl AdminRecord for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}

/// Покупательская активность пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub orders_count: u32,
    pub total_spent: f64,
    pub last_order_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> User {
        User {
            id: "u-1".into(),
            username: "jdoe".into(),
            email: None,
            full_name: full_name.map(String::from),
            phone: None,
            role: UserRole::Vendor,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login_at: None,
            concurrency_stamp: "s".into(),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user(Some("John Doe")).display_name(), "John Doe");
        assert_eq!(user(Some("  ")).display_name(), "jdoe");
        assert_eq!(user(None).display_name(), "jdoe");
    }
}
