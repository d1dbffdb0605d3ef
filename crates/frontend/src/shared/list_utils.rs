/// Утилиты для серверных списков: поле поиска, индикаторы сортировки, форматирование
use leptos::prelude::*;

/// Поле поиска с кнопкой очистки.
///
/// Сообщает о каждом нажатии клавиши; задержку перед запросом делает контроллер списка.
#[component]
pub fn SearchInput(
    /// Зафиксированное значение поиска (восстанавливается в поле при монтировании)
    #[prop(into)]
    value: Signal<String>,
    /// Каждое изменение текста
    #[prop(into)]
    on_input: Callback<String>,
    /// Кнопка очистки
    #[prop(into)]
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        input_value.set(String::new());
        on_clear.run(());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    input_value.set(val.clone());
                    on_input.run(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Сумма с двумя знаками и разделителем тысяч: `1 234.50`
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// ISO-8601 -> `YYYY-MM-DD HH:MM`; нераспознанная строка возвращается как есть
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn format_flag(value: bool) -> String {
    if value { "Да" } else { "Нет" }.to_string()
}

/// Пустое значение показывается прочерком
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(999.5), "999.50");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(-1500.0), "-1 500.00");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-05T14:07:00Z"), "2024-03-05 14:07");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("price", "price", true), " ▲");
        assert_eq!(get_sort_indicator("price", "price", false), " ▼");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
