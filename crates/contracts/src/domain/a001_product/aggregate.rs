use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Draft,
    Active,
    Inactive,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Draft,
        ProductStatus::Active,
        ProductStatus::Inactive,
    ];

    /// Значение для фильтра `status`
    pub fn as_wire(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "DRAFT",
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Inactive => "INACTIVE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "Черновик",
            ProductStatus::Active => "Активен",
            ProductStatus::Inactive => "Неактивен",
        }
    }
}

/// Товар продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub sub_category_id: Option<String>,
    pub brand_id: Option<String>,
    pub brand_name: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub status: ProductStatus,
    pub created_at: String,
    pub concurrency_stamp: String,
}

impl AdminRecord for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.sku)
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}

/// Сводка по товару для карточки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub stock_on_hand: i64,
    pub units_sold: i64,
    pub revenue: f64,
    pub open_orders: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_camel_case() {
        let product: Product = serde_json::from_value(json!({
            "id": "p-1",
            "sku": "SKU-1",
            "name": "Chair",
            "description": null,
            "categoryId": "c-1",
            "categoryName": "Furniture",
            "subCategoryId": null,
            "brandId": null,
            "brandName": null,
            "price": 12.5,
            "stock": 4,
            "status": "ACTIVE",
            "createdAt": "2024-03-15T14:02:26Z",
            "concurrencyStamp": "stamp-1"
        }))
        .unwrap();

        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.category_name.as_deref(), Some("Furniture"));
        assert_eq!(product.concurrency_stamp(), "stamp-1");
        assert_eq!(product.display_name(), "Chair (SKU-1)");
    }
}
