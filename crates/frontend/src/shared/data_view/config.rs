use contracts::shared::list_query::SortSpec;
use serde::{Deserialize, Serialize};

use super::pagination::PageBase;

/// Settings of one list controller.
///
/// Deserializes with defaults for missing fields, so list screens can keep
/// partial overrides in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Quiet period after the last keystroke before search is committed
    pub debounce_ms: u32,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Page numbering expected by the backend
    pub page_base: PageBase,
    /// Field the view context date range applies to
    pub date_key: String,
    pub default_sort: Vec<SortSpec>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            page_size: 50,
            page_size_options: vec![10, 20, 50, 100],
            page_base: PageBase::One,
            date_key: "createdAt".to_string(),
            default_sort: Vec::new(),
        }
    }
}

impl ListConfig {
    pub fn with_default_sort(mut self, sort: Vec<SortSpec>) -> Self {
        self.default_sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ListConfig =
            serde_json::from_str(r#"{"debounce_ms": 300, "page_base": "zero"}"#)
                .unwrap();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.page_base, PageBase::Zero);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.date_key, "createdAt");
    }
}
