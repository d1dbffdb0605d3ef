use contracts::system::users::{User, UserRole, UserSummary};

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_flag, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, DetailResource, StatusFilter};

/// Учётные записи (администраторы, продавцы, покупатели)
pub struct Users;

impl AdminResource for Users {
    type Row = User;

    const PATH: &'static str = "system/users";
    const TAB_KEY: &'static str = "sys_users";
    const TITLE: &'static str = "Пользователи";

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter {
            key: "role",
            label: "Роль",
            options: [UserRole::Admin, UserRole::Vendor, UserRole::Customer]
                .iter()
                .map(|role| (role_wire(*role), role.label()))
                .collect(),
        })
    }
}

fn role_wire(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "ADMIN",
        UserRole::Vendor => "VENDOR",
        UserRole::Customer => "CUSTOMER",
    }
}

impl DetailResource for Users {
    type Summary = UserSummary;

    /// Покупки бывают только у покупателей
    fn wants_summary(row: &User) -> bool {
        row.role == UserRole::Customer
    }
}

impl TableRecord for User {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("username", "Логин"),
            Column::new("fullName", "ФИО"),
            Column::new("email", "Email"),
            Column::new("role", "Роль"),
            Column::new("isActive", "Активен"),
            Column::new("lastLoginAt", "Последний вход"),
            Column::new("createdAt", "Создан"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            or_dash(self.full_name.as_deref()),
            or_dash(self.email.as_deref()),
            self.role.label().to_string(),
            format_flag(self.is_active),
            self.last_login_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "никогда".to_string()),
            format_timestamp(&self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: "u-1".into(),
            username: "jdoe".into(),
            email: Some("jdoe@example.com".into()),
            full_name: None,
            phone: None,
            role,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login_at: None,
            concurrency_stamp: "s".into(),
        }
    }

    #[test]
    fn test_only_customers_have_summary() {
        assert!(Users::wants_summary(&user(UserRole::Customer)));
        assert!(!Users::wants_summary(&user(UserRole::Admin)));
    }

    #[test]
    fn test_list_endpoint_and_cells() {
        assert_eq!(Users::list_path(), "/api/system/users/list");

        let cells = user(UserRole::Vendor).cells();
        assert_eq!(cells.len(), User::columns().len());
        assert_eq!(cells[1], "—");
        assert_eq!(cells[3], "Продавец");
        assert_eq!(cells[5], "никогда");
    }
}
