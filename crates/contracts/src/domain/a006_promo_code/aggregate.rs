use serde::{Deserialize, Serialize};

use crate::domain::a005_offer::aggregate::DiscountKind;
use crate::shared::record::AdminRecord;

/// Промокод
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: String,
    pub code: String,
    pub discount_kind: DiscountKind,
    pub discount_value: f64,
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    pub expires_at: Option<String>,
    pub is_active: bool,
    pub concurrency_stamp: String,
}

impl PromoCode {
    /// "3 / 10" or "3 / ∞"
    pub fn usage_text(&self) -> String {
        match self.usage_limit {
            Some(limit) => format!("{} / {}", self.used_count, limit),
            None => format!("{} / ∞", self.used_count),
        }
    }
}

impl AdminRecord for PromoCode {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.code.clone()
    }

    fn concurrency_stamp(&self) -> &str {
        &self.concurrency_stamp
    }
}
