use contracts::domain::a005_offer::aggregate::Offer;
use contracts::shared::list_query::SortSpec;

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::data_view::ListConfig;
use crate::shared::list_utils::{format_flag, format_timestamp};
use crate::shared::resource::{AdminResource, StatusFilter};

/// Акции. Период фильтрует по дате начала.
pub struct Offers;

impl AdminResource for Offers {
    type Row = Offer;

    const PATH: &'static str = "offers";
    const TAB_KEY: &'static str = "a005_offer";
    const TITLE: &'static str = "Акции";

    fn default_sort() -> Vec<SortSpec> {
        vec![SortSpec::desc("startsAt")]
    }

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter::active())
    }

    fn list_config() -> ListConfig {
        ListConfig {
            date_key: "startsAt".to_string(),
            ..ListConfig::default()
        }
        .with_default_sort(Self::default_sort())
    }
}

impl TableRecord for Offer {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Название"),
            Column::new("discountValue", "Скидка").numeric(),
            Column::new("startsAt", "Начало"),
            Column::new("endsAt", "Окончание"),
            Column::new("productsCount", "Товаров").numeric(),
            Column::new("isActive", "Активна"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.discount_kind.format_amount(self.discount_value),
            format_timestamp(&self.starts_at),
            format_timestamp(&self.ends_at),
            self.products_count.to_string(),
            format_flag(self.is_active),
        ]
    }
}
