use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// Первый и последний день месяца
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Месяц, предшествующий месяцу `date`
pub fn previous_month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    if date.month() == 1 {
        month_bounds(date.year() - 1, 12)
    } else {
        month_bounds(date.year(), date.month() - 1)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Период по дате создания: два поля и быстрый выбор месяца.
///
/// Пустое поле означает открытую границу.
#[component]
pub fn DateRangeFilter(
    /// Callback (от, до)
    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    let emit = move || {
        on_change.run((
            parse_date(&date_from.get_untracked()),
            parse_date(&date_to.get_untracked()),
        ));
    };

    let set_range = move |bounds: Option<(NaiveDate, NaiveDate)>| {
        match bounds {
            Some((from, to)) => {
                date_from.set(from.format("%Y-%m-%d").to_string());
                date_to.set(to.format("%Y-%m-%d").to_string());
            }
            None => {
                date_from.set(String::new());
                date_to.set(String::new());
            }
        }
        emit();
    };

    let on_current_month = move |_| {
        let today = Utc::now().date_naive();
        set_range(month_bounds(today.year(), today.month()));
    };

    let on_previous_month = move |_| {
        let anchor = parse_date(&date_from.get_untracked()).unwrap_or_else(|| Utc::now().date_naive());
        set_range(previous_month_bounds(anchor));
    };

    let input_style = "padding: 0 8px; font-size: 0.875rem; border: none; background: transparent; width: 130px;";

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}
            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    style=input_style
                    prop:value=move || date_from.get()
                    on:change=move |ev| {
                        date_from.set(event_target_value(&ev));
                        emit();
                    }
                />
                <div>"—"</div>
                <input
                    type="date"
                    style=input_style
                    prop:value=move || date_to.get()
                    on:change=move |ev| {
                        date_to.set(event_target_value(&ev));
                        emit();
                    }
                />
                <ButtonGroup>
                    <Button size=ButtonSize::Small on_click=on_previous_month attr:title="Предыдущий месяц">"-1"</Button>
                    <Button size=ButtonSize::Small on_click=on_current_month attr:title="Текущий месяц">"0"</Button>
                    <Button size=ButtonSize::Small on_click=move |_| set_range(None) attr:title="Сбросить период">"×"</Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2), Some((date(2024, 2, 1), date(2024, 2, 29))));
        assert_eq!(month_bounds(2023, 12), Some((date(2023, 12, 1), date(2023, 12, 31))));
        assert_eq!(month_bounds(2023, 13), None);
    }

    #[test]
    fn test_previous_month_crosses_year() {
        assert_eq!(
            previous_month_bounds(date(2024, 1, 15)),
            Some((date(2023, 12, 1), date(2023, 12, 31)))
        );
    }
}
