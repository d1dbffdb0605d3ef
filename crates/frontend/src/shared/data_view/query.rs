use contracts::shared::list_query::{Filter, FilterOperator, ListRequest, SortSpec};

use super::config::ListConfig;
use super::context::{is_date_bound, ViewContext};
use super::pagination::{PaginationModel, PaginationUpdate};

/// Search, filters, sort and page of one list screen.
///
/// Any change of what is selected (search, filters, sort) moves back to the
/// first page.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub filters: Vec<Filter>,
    pub sort: Vec<SortSpec>,
    pub pagination: PaginationModel,
}

impl QueryState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: config.default_sort.clone(),
            pagination: PaginationModel::new(config.page_size),
        }
    }

    pub fn page(&self) -> usize {
        self.pagination.page
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    /// Stores trimmed search text; returns `false` if it was already current
    pub fn set_search(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.search == text {
            return false;
        }
        self.search = text.to_string();
        self.pagination.reset();
        true
    }

    pub fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = filters;
        self.pagination.reset();
    }

    /// Replaces the filter with the same key and operator, or appends it
    pub fn upsert_filter(&mut self, filter: Filter) {
        match self
            .filters
            .iter_mut()
            .find(|f| f.key == filter.key && f.operator == filter.operator)
        {
            Some(existing) => *existing = filter,
            None => self.filters.push(filter),
        }
        self.pagination.reset();
    }

    /// Returns `false` when no such filter was set
    pub fn remove_filter(&mut self, key: &str, operator: FilterOperator) -> bool {
        let before = self.filters.len();
        self.filters
            .retain(|f| !(f.key == key && f.operator == operator));
        let removed = self.filters.len() != before;
        if removed {
            self.pagination.reset();
        }
        removed
    }

    pub fn filter_value(&self, key: &str, operator: FilterOperator) -> Option<&Filter> {
        self.filters
            .iter()
            .find(|f| f.key == key && f.operator == operator)
    }

    pub fn set_sort(&mut self, sort: Vec<SortSpec>) {
        self.sort = sort;
        self.pagination.reset();
    }

    /// Header click: same column flips direction, another column sorts ascending
    pub fn toggle_sort(&mut self, key: &str) {
        let next = match self.sort.first() {
            Some(current) if current.key == key => SortSpec {
                key: key.to_string(),
                direction: current.direction.toggled(),
            },
            _ => SortSpec::asc(key),
        };
        self.set_sort(vec![next]);
    }

    /// Primary sort column and whether it is ascending
    pub fn primary_sort(&self) -> Option<(&str, bool)> {
        self.sort
            .first()
            .map(|s| (s.key.as_str(), s.direction.is_ascending()))
    }

    pub fn apply_pagination(&mut self, update: PaginationUpdate) -> bool {
        self.pagination.apply(update)
    }

    /// Wire parameters: context filters first, then user filters.
    /// A user period on `date_key` replaces the context period.
    pub fn to_request(&self, context: &ViewContext, config: &ListConfig) -> ListRequest {
        let mut filters = context.base_filters(&config.date_key);
        if self.filters.iter().any(|f| is_date_bound(f, &config.date_key)) {
            filters.retain(|f| !is_date_bound(f, &config.date_key));
        }
        filters.extend(self.filters.iter().cloned());

        ListRequest {
            filters,
            sorting: self.sort.clone(),
            page: config.page_base.to_base(self.pagination.page),
            page_size: self.pagination.page_size,
            search: (!self.search.is_empty()).then(|| self.search.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::pagination::PageBase;
    use chrono::NaiveDate;
    use contracts::shared::list_query::DateRange;

    fn state_on_page(page: usize) -> QueryState {
        let mut state = QueryState::new(&ListConfig::default());
        state.apply_pagination(PaginationUpdate::page(page));
        state
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = state_on_page(3);
        state.set_filters(vec![Filter::eq("status", "ACTIVE")]);
        assert_eq!(state.page(), 0);

        let mut state = state_on_page(3);
        state.upsert_filter(Filter::eq("status", "DRAFT"));
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_upsert_replaces_same_key_and_operator() {
        let mut state = QueryState::new(&ListConfig::default());
        state.upsert_filter(Filter::gte("createdAt", "2024-01-01"));
        state.upsert_filter(Filter::lte("createdAt", "2024-01-31"));
        state.upsert_filter(Filter::gte("createdAt", "2024-01-10"));

        assert_eq!(state.filters.len(), 2);
        assert_eq!(
            state.filter_value("createdAt", FilterOperator::Gte),
            Some(&Filter::gte("createdAt", "2024-01-10"))
        );
    }

    #[test]
    fn test_remove_missing_filter_keeps_page() {
        let mut state = state_on_page(2);
        assert!(!state.remove_filter("status", FilterOperator::Eq));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_search_is_trimmed_and_resets_page() {
        let mut state = state_on_page(4);
        assert!(state.set_search("  chair "));
        assert_eq!(state.search, "chair");
        assert_eq!(state.page(), 0);

        state.apply_pagination(PaginationUpdate::page(1));
        assert!(!state.set_search("chair"));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = state_on_page(2);
        state.toggle_sort("price");
        assert_eq!(state.primary_sort(), Some(("price", true)));
        assert_eq!(state.page(), 0);

        state.toggle_sort("price");
        assert_eq!(state.primary_sort(), Some(("price", false)));

        state.toggle_sort("name");
        assert_eq!(state.primary_sort(), Some(("name", true)));
    }

    #[test]
    fn test_to_request_merges_context_and_maps_page() {
        let mut state = state_on_page(2);
        state.filters.push(Filter::eq("status", "ACTIVE"));
        let context = ViewContext::for_vendor("v-1");

        let request = state.to_request(&context, &ListConfig::default());
        assert_eq!(request.page, 3);
        assert_eq!(request.page_size, 50);
        assert_eq!(request.search, None);
        assert_eq!(
            request.filters,
            vec![Filter::eq("vendorId", "v-1"), Filter::eq("status", "ACTIVE")]
        );

        let zero_based = ListConfig {
            page_base: PageBase::Zero,
            ..ListConfig::default()
        };
        assert_eq!(state.to_request(&context, &zero_based).page, 2);
    }

    #[test]
    fn test_user_period_replaces_context_period() {
        let config = ListConfig::default();
        let context = ViewContext::for_vendor("v-1").with_date_range(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        ));
        let mut state = QueryState::new(&config);

        let request = state.to_request(&context, &config);
        assert_eq!(request.filters.len(), 3);

        state.upsert_filter(Filter::gte(config.date_key.as_str(), "2024-03-01"));
        state.upsert_filter(Filter::eq("status", "ACTIVE"));
        let request = state.to_request(&context, &config);
        assert_eq!(
            request.filters,
            vec![
                Filter::eq("vendorId", "v-1"),
                Filter::gte(config.date_key.as_str(), "2024-03-01"),
                Filter::eq("status", "ACTIVE"),
            ]
        );
    }
}
