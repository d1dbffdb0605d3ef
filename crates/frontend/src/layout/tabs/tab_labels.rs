//! Заголовки табов по ключу

/// Ключ detail-таба: `<list key>_detail_<id>`
pub const DETAIL_SEPARATOR: &str = "_detail_";

fn list_label(key: &str) -> Option<&'static str> {
    let label = match key {
        "a001_product" => "Товары",
        "a002_category" => "Категории",
        "a003_sub_category" => "Подкатегории",
        "a004_brand" => "Бренды",
        "a005_offer" => "Акции",
        "a006_promo_code" => "Промокоды",
        "a007_banner" => "Баннеры",
        "a008_order" => "Заказы",
        "sys_users" => "Пользователи",
        _ => return None,
    };
    Some(label)
}

/// Название одной записи для detail-табов
fn element_label(list_key: &str) -> &'static str {
    match list_key {
        "a001_product" => "Товар",
        "a008_order" => "Заказ",
        "sys_users" => "Пользователь",
        _ => "Запись",
    }
}

/// Разбирает `a001_product_detail_42` на `("a001_product", "42")`
pub fn split_detail_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(DETAIL_SEPARATOR)
}

/// «<сущность> · <идентификатор>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Читаемый заголовок таба. Неизвестный ключ возвращается как есть.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(label) = list_label(key) {
        return label.to_string();
    }
    match split_detail_key(key) {
        Some((list_key, id)) => detail_tab_label(element_label(list_key), id),
        None => key.to_string(),
    }
}
