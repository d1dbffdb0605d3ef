use contracts::domain::a007_banner::aggregate::Banner;
use contracts::shared::list_query::SortSpec;

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_flag, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, StatusFilter};

/// Баннеры витрины
pub struct Banners;

impl AdminResource for Banners {
    type Row = Banner;

    const PATH: &'static str = "banners";
    const TAB_KEY: &'static str = "a007_banner";
    const TITLE: &'static str = "Баннеры";

    fn default_sort() -> Vec<SortSpec> {
        vec![SortSpec::asc("position")]
    }

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter::active())
    }
}

impl TableRecord for Banner {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("position", "Позиция").numeric(),
            Column::new("title", "Заголовок"),
            Column::new("targetUrl", "Ссылка").fixed(),
            Column::new("isActive", "Показывается"),
            Column::new("createdAt", "Создан"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.title.clone(),
            or_dash(self.target_url.as_deref()),
            format_flag(self.is_active),
            format_timestamp(&self.created_at),
        ]
    }
}
