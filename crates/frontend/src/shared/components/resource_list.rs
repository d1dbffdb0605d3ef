//! Страница списка ресурса: заголовок, поиск, фильтры, таблица
use std::rc::Rc;

use chrono::NaiveDate;
use contracts::shared::list_query::{Filter, FilterOperator};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationStore;
use crate::shared::components::data_table::{DataTable, TableRecord};
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::data_view::context::is_date_bound;
use crate::shared::data_view::{use_server_pagination, ListFetcher, ServerPagination};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::resource::{AdminResource, RestList};

/// Заменяет границы `gte`/`lte` по `date_key`, остальные фильтры не трогает
pub fn with_date_bounds(
    mut filters: Vec<Filter>,
    date_key: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Filter> {
    filters.retain(|f| !is_date_bound(f, date_key));
    if let Some(from) = from {
        filters.push(Filter::gte(date_key, from.format("%Y-%m-%d").to_string()));
    }
    if let Some(to) = to {
        filters.push(Filter::lte(date_key, to.format("%Y-%m-%d").to_string()));
    }
    filters
}

fn apply_date_range<F>(list: ServerPagination<F>, from: Option<NaiveDate>, to: Option<NaiveDate>)
where
    F: ListFetcher + 'static,
    F::Row: Send + Sync,
{
    let (from, to) = match (from, to) {
        (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
        bounds => bounds,
    };
    let date_key = list.config().date_key;
    let filters = list.query.with_untracked(|q| q.filters.clone());
    list.set_filters(with_date_bounds(filters, &date_key, from, to));
}

/// Список ресурса `R`. `on_open` вызывается при клике по строке.
pub fn resource_list_view<R>(on_open: Option<Callback<R::Row>>) -> AnyView
where
    R: AdminResource,
    R::Row: TableRecord,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let toasts =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    let list = use_server_pagination(RestList::<R>::new(), ctx.view_context(), R::list_config())
        .with_notifier(Rc::new(toasts));

    let is_loading = Signal::derive(move || list.view.with(|v| v.loading));
    let search = Signal::derive(move || list.query.with(|q| q.search.clone()));

    let status_select = R::status_filter().map(|status| {
        let key = status.key;
        let current = move || {
            list.query.with(|q| {
                match q.filter_value(key, FilterOperator::Eq).map(|f| &f.value) {
                    Some(contracts::shared::list_query::FilterValue::Single(v)) => v.clone(),
                    _ => String::new(),
                }
            })
        };
        view! {
            <label class="filter-panel__field">
                <span>{status.label}</span>
                <select
                    class="filter-panel__select"
                    prop:value=current
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if value.is_empty() {
                            list.remove_filter(key, FilterOperator::Eq);
                        } else {
                            list.upsert_filter(Filter::eq(key, value));
                        }
                    }
                >
                    <option value="">"Все"</option>
                    {status.options.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
            </label>
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon(R::PATH)}
                    <h1 class="page__title">{R::TITLE}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || list.view.with(|v| v.total).to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_input=Callback::new(move |text: String| list.search_input(text))
                    on_clear=Callback::new(move |_| list.clear_search())
                />
                {status_select}
                <DateRangeFilter on_change=Callback::new(move |(from, to)| apply_date_range(list, from, to)) />
            </div>

            <DataTable list=list on_open=on_open />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_bounds_replace_previous_ones() {
        let filters = vec![
            Filter::eq("status", "ACTIVE"),
            Filter::gte("createdAt", "2024-01-01"),
            Filter::lte("createdAt", "2024-01-31"),
        ];
        let filters = with_date_bounds(filters, "createdAt", Some(date(2024, 2, 1)), None);

        assert_eq!(
            filters,
            vec![
                Filter::eq("status", "ACTIVE"),
                Filter::gte("createdAt", "2024-02-01"),
            ]
        );
    }

    #[test]
    fn test_clearing_range_keeps_other_filters() {
        let filters = vec![Filter::gte("createdAt", "2024-01-01"), Filter::eq("brandId", "b1")];
        assert_eq!(
            with_date_bounds(filters, "createdAt", None, None),
            vec![Filter::eq("brandId", "b1")]
        );
    }
}
