use contracts::domain::a006_promo_code::aggregate::PromoCode;
use contracts::shared::list_query::SortSpec;

use crate::shared::components::data_table::{Column, TableRecord};
use crate::shared::data_view::ListConfig;
use crate::shared::list_utils::{format_flag, format_timestamp};
use crate::shared::resource::{AdminResource, StatusFilter};

/// Промокоды. Период фильтрует по сроку действия.
pub struct PromoCodes;

impl AdminResource for PromoCodes {
    type Row = PromoCode;

    const PATH: &'static str = "promo-codes";
    const TAB_KEY: &'static str = "a006_promo_code";
    const TITLE: &'static str = "Промокоды";

    fn default_sort() -> Vec<SortSpec> {
        vec![SortSpec::asc("code")]
    }

    fn status_filter() -> Option<StatusFilter> {
        Some(StatusFilter::active())
    }

    fn list_config() -> ListConfig {
        ListConfig {
            date_key: "expiresAt".to_string(),
            ..ListConfig::default()
        }
        .with_default_sort(Self::default_sort())
    }
}

impl TableRecord for PromoCode {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("code", "Код"),
            Column::new("discountValue", "Скидка").numeric(),
            Column::new("usedCount", "Использован").numeric(),
            Column::new("expiresAt", "Действует до"),
            Column::new("isActive", "Активен"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.discount_kind.format_amount(self.discount_value),
            self.usage_text(),
            self.expires_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "бессрочно".to_string()),
            format_flag(self.is_active),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_offer::aggregate::DiscountKind;

    #[test]
    fn test_cells_for_unlimited_code() {
        let code = PromoCode {
            id: "pc1".into(),
            code: "SPRING".into(),
            discount_kind: DiscountKind::Fixed,
            discount_value: 150.0,
            usage_limit: None,
            used_count: 3,
            expires_at: None,
            is_active: false,
            concurrency_stamp: "s".into(),
        };
        assert_eq!(
            code.cells(),
            vec!["SPRING", "150.00", "3 / ∞", "бессрочно", "Нет"]
        );
    }
}
