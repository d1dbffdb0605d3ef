use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    Percent,
    Fixed,
}

impl DiscountKind {
    /// Скидка для таблицы: "15%" или "150.00"
    pub fn format_amount(&self, amount: f64) -> String {
        match self {
            DiscountKind::Percent => format!("{}%", amount),
            DiscountKind::Fixed => format!("{:.2}", amount),
        }
    }
}

/// Акция на товары (скидка действует в заданном периоде)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub discount_kind: DiscountKind,
    pub discount_value: f64,
    pub starts_at: String,
    pub ends_at: String,
    pub is_active: bool,
    pub products_count: usize,
    pub concurrency_stamp: String,
}

impl AdminRecord for Offer {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(DiscountKind::Percent.format_amount(15.0), "15%");
        assert_eq!(DiscountKind::Fixed.format_amount(150.0), "150.00");
    }
}
