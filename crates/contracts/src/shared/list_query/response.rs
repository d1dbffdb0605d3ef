use serde::{Deserialize, Serialize};

/// Pagination block returned by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total_count: usize,
    pub page_size: usize,
    pub page_number: usize,
}

/// Response of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub list: Vec<T>,
    pub pagination: PaginationInfo,
}

/// Rows of one page plus the total number of matching records
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub rows: Vec<T>,
    pub total: usize,
}

impl<T> From<ListResponse<T>> for FetchResult<T> {
    fn from(response: ListResponse<T>) -> Self {
        // A backend reporting fewer records than it returned is trusted for rows, not for total
        let total = response.pagination.total_count.max(response.list.len());
        Self {
            rows: response.list,
            total,
        }
    }
}
