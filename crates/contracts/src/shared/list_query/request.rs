use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::sort::SortSpec;

/// Parameters of a list endpoint call (`POST /api/{resource}/list`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sorting: Vec<SortSpec>,
    /// Page number in the convention the backend expects
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Inclusive date range used by list screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Builds a range, swapping the bounds if they come reversed
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Formats bounds as `YYYY-MM-DD` for filter values
    pub fn to_wire(&self) -> (String, String) {
        (
            self.from.format("%Y-%m-%d").to_string(),
            self.to.format("%Y-%m-%d").to_string(),
        )
    }
}
