use contracts::domain::a004_brand::aggregate::Brand;

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::list_utils::{format_flag, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, StatusFilter};

pub struct Brands;

impl AdminResource for Brands {
    type Row = Brand;

    const PATH: &'static str = "brands";
    const TAB_KEY: &'static str = "a004_brand";
    const TITLE: &'static str = "Бренды";

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter::active())
    }
}

impl TableRecord for Brand {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Наименование"),
            Column::new("country", "Страна"),
            Column::new("isActive", "Активен"),
            Column::new("createdAt", "Создан"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            or_dash(self.country.as_deref()),
            format_flag(self.is_active),
            format_timestamp(&self.created_at),
        ]
    }
}
