use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub products_count: usize,
    pub created_at: String,
    pub concurrency_stamp: String,
}

impl AdminRecord for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}
