//! Wire contract of the server-paged list endpoints.
//!
//! Every list screen sends a [`ListRequest`] (filters, sorting, page, page size,
//! optional search text) and receives a [`ListResponse`].

pub mod filter;
pub mod request;
pub mod response;
pub mod sort;

pub use filter::*;
pub use request::*;
pub use response::*;
pub use sort::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = ListRequest {
            filters: vec![Filter::eq("status", "ACTIVE")],
            sorting: vec![SortSpec::desc("createdAt")],
            page: 1,
            page_size: 20,
            search: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filters": [{"key": "status", "eq": "ACTIVE"}],
                "sorting": [{"key": "createdAt", "direction": "desc"}],
                "page": 1,
                "pageSize": 20
            })
        );
    }

    #[test]
    fn test_response_into_fetch_result() {
        let response: ListResponse<String> = serde_json::from_value(json!({
            "list": ["a", "b"],
            "pagination": {"totalCount": 42, "pageSize": 2, "pageNumber": 3}
        }))
        .unwrap();
        assert_eq!(response.pagination.page_number, 3);

        let result = FetchResult::from(response);
        assert_eq!(result.rows, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.total, 42);
    }

    #[test]
    fn test_fetch_result_total_never_below_rows() {
        let response = ListResponse {
            list: vec![1, 2, 3],
            pagination: PaginationInfo {
                total_count: 0,
                page_size: 10,
                page_number: 1,
            },
        };
        assert_eq!(FetchResult::from(response).total, 3);
    }

    #[test]
    fn test_date_range_orders_bounds() {
        let a = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let b = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = DateRange::new(a, b);
        assert_eq!(range.to_wire(), ("2024-03-01".to_string(), "2024-03-15".to_string()));
    }
}
