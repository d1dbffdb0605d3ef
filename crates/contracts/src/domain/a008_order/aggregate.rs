use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Новый",
            OrderStatus::Confirmed => "Подтверждён",
            OrderStatus::Shipped => "Отгружен",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Cancelled => "Отменён",
        }
    }
}

/// Заказ покупателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_no: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub status: OrderStatus,
    pub items_count: u32,
    pub total: f64,
    pub promo_code: Option<String>,
    pub created_at: String,
    pub concurrency_stamp: String,
}

impl AdminRecord for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("№{} ({})", self.order_no, self.customer_name)
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLine {
    /// Сумма строки: цена × количество
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Итоги заказа, считаются на сервере
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    pub discount: f64,
    pub delivery: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amount_multiplies_price_by_quantity() {
        let line = OrderLine {
            product_id: "p1".into(),
            product_name: "Чай".into(),
            quantity: 3,
            unit_price: 12.5,
        };
        assert_eq!(line.amount(), 37.5);

        let empty = OrderLine {
            quantity: 0,
            ..line
        };
        assert_eq!(empty.amount(), 0.0);
    }
}
