use contracts::domain::a001_product::aggregate::{Product, ProductStatus, ProductSummary};

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_money, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, DetailResource, StatusFilter};

/// Товары продавца
pub struct Products;

impl AdminResource for Products {
    type Row = Product;

    const PATH: &'static str = "products";
    const TAB_KEY: &'static str = "a001_product";
    const TITLE: &'static str = "Товары";

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter {
            key: "status",
            label: "Статус",
            options: ProductStatus::ALL
                .iter()
                .map(|s| (s.as_wire(), s.label()))
                .collect(),
        })
    }
}

impl DetailResource for Products {
    type Summary = ProductSummary;

    /// Черновик ещё не продавался
    fn wants_summary(row: &Product) -> bool {
        row.status != ProductStatus::Draft
    }
}

impl TableRecord for Product {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("sku", "Артикул"),
            Column::new("name", "Наименование"),
            Column::new("categoryName", "Категория"),
            Column::new("brandName", "Бренд"),
            Column::new("price", "Цена").numeric(),
            Column::new("stock", "Остаток").numeric(),
            Column::new("status", "Статус"),
            Column::new("createdAt", "Создан"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.name.clone(),
            or_dash(self.category_name.as_deref()),
            or_dash(self.brand_name.as_deref()),
            format_money(self.price),
            self.stock.to_string(),
            self.status.label().to_string(),
            format_timestamp(&self.created_at),
        ]
    }
}
