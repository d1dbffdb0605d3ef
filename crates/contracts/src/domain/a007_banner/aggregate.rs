use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

/// Баннер на витрине
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub target_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: String,
    pub concurrency_stamp: String,
}

impl AdminRecord for Banner {
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
