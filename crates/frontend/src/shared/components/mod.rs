pub mod data_table;
pub mod date_range_filter;
pub mod detail;
pub mod pagination_controls;
pub mod resource_list;
