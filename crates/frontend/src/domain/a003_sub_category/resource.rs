use contracts::domain::a003_sub_category::aggregate::SubCategory;

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_flag, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, StatusFilter};

pub struct SubCategories;

impl AdminResource for SubCategories {
    type Row = SubCategory;

    const PATH: &'static str = "sub-categories";
    const TAB_KEY: &'static str = "a003_sub_category";
    const TITLE: &'static str = "Подкатегории";

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter::active())
    }
}

impl TableRecord for SubCategory {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Наименование"),
            Column::new("categoryName", "Категория"),
            Column::new("slug", "Код в URL"),
            Column::new("isActive", "Активна"),
            Column::new("createdAt", "Создана"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            or_dash(self.category_name.as_deref()),
            self.slug.clone(),
            format_flag(self.is_active),
            format_timestamp(&self.created_at),
        ]
    }
}
