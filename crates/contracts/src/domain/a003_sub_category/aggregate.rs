use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

/// Подкатегория, всегда принадлежит одной категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub category_id: String,
    pub category_name: Option<String>,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: String,
    pub concurrency_stamp: String,
}

impl AdminRecord for SubCategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        match &self.category_name {
            Some(category) => format!("{} / {}", category, self.name),
            None => self.name.clone(),
        }
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}
