use contracts::domain::a008_order::aggregate::{Order, OrderStatus, OrderSummary};

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_money, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, DetailResource, StatusFilter};

/// Заказы покупателей
pub struct Orders;

impl AdminResource for Orders {
    type Row = Order;

    const PATH: &'static str = "orders";
    const TAB_KEY: &'static str = "a008_order";
    const TITLE: &'static str = "Заказы";

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter {
            key: "status",
            label: "Статус",
            options: OrderStatus::ALL
                .iter()
                .map(|s| (s.as_wire(), s.label()))
                .collect(),
        })
    }
}

impl DetailResource for Orders {
    type Summary = OrderSummary;
}

impl TableRecord for Order {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("orderNo", "Номер"),
            Column::new("customerName", "Покупатель"),
            Column::new("customerPhone", "Телефон").fixed(),
            Column::new("status", "Статус"),
            Column::new("itemsCount", "Позиций").numeric(),
            Column::new("total", "Сумма").numeric(),
            Column::new("promoCode", "Промокод"),
            Column::new("createdAt", "Создан"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_no.clone(),
            self.customer_name.clone(),
            or_dash(self.customer_phone.as_deref()),
            self.status.label().to_string(),
            self.items_count.to_string(),
            format_money(self.total),
            or_dash(self.promo_code.as_deref()),
            format_timestamp(&self.created_at),
        ]
    }
}
