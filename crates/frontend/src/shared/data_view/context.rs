use contracts::shared::list_query::{DateRange, Filter, FilterOperator};

/// `gte`/`lte` bound on the period column
pub fn is_date_bound(filter: &Filter, date_key: &str) -> bool {
    filter.key == date_key && matches!(filter.operator, FilterOperator::Gte | FilterOperator::Lte)
}

/// Session-wide scope of a list screen (vendor, branch, period).
///
/// Passed into controllers when they are created; controllers never read
/// it from a global store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub vendor_id: Option<String>,
    pub branch_id: Option<String>,
    pub date_range: Option<DateRange>,
}

impl ViewContext {
    pub fn for_vendor(vendor_id: impl Into<String>) -> Self {
        Self {
            vendor_id: Some(vendor_id.into()),
            ..Default::default()
        }
    }

    pub fn with_branch(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Filters every request of this context carries, ahead of user filters
    pub fn base_filters(&self, date_key: &str) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(vendor_id) = &self.vendor_id {
            filters.push(Filter::eq("vendorId", vendor_id.clone()));
        }
        if let Some(branch_id) = &self.branch_id {
            filters.push(Filter::eq("branchId", branch_id.clone()));
        }
        if let Some(range) = &self.date_range {
            let (from, to) = range.to_wire();
            filters.push(Filter::gte(date_key, from));
            filters.push(Filter::lte(date_key, to));
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_context_adds_nothing() {
        assert!(ViewContext::default().base_filters("createdAt").is_empty());
    }

    #[test]
    fn test_full_context_filters() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        let context = ViewContext::for_vendor("v-1")
            .with_branch("b-2")
            .with_date_range(range);

        let filters = context.base_filters("orderedAt");
        assert_eq!(filters.len(), 4);
        assert_eq!(filters[0], Filter::eq("vendorId", "v-1"));
        assert_eq!(filters[1], Filter::eq("branchId", "b-2"));
        assert_eq!(filters[2].key, "orderedAt");
        assert_eq!(filters[2].operator, FilterOperator::Gte);
        assert_eq!(filters[3], Filter::lte("orderedAt", "2024-01-31"));
    }
}
