use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::list_query::SortSpec;

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_flag, format_timestamp};
use crate::shared::resource::{AdminResource, StatusFilter};

/// Категории каталога
pub struct Categories;

impl AdminResource for Categories {
    type Row = Category;

    const PATH: &'static str = "categories";
    const TAB_KEY: &'static str = "a002_category";
    const TITLE: &'static str = "Категории";

    fn default_sort() -> Vec<SortSpec> {
        vec![SortSpec::asc("sortOrder")]
    }

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter::active())
    }
}

impl TableRecord for Category {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Наименование"),
            Column::new("slug", "Код в URL"),
            Column::new("sortOrder", "Порядок").numeric(),
            Column::new("productsCount", "Товаров").numeric(),
            Column::new("isActive", "Активна"),
            Column::new("createdAt", "Создана"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.slug.clone(),
            self.sort_order.to_string(),
            self.products_count.to_string(),
            format_flag(self.is_active),
            format_timestamp(&self.created_at),
        ]
    }
}
