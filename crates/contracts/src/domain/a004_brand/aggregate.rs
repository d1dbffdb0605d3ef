use serde::{Deserialize, Serialize};

use crate::shared::record::AdminRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub concurrency_stamp: String,
}

impl AdminRecord for Brand {
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
