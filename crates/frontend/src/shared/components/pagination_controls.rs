use crate::shared::data_view::PaginationModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Навигация по страницам серверной таблицы.
///
/// Страницы здесь с нуля, в подписи с единицы.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
    /// Кнопки неактивны, пока страница грузится
    #[prop(optional, into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || {
        let mut model = PaginationModel::new(page_size.get());
        model.page = current_page.get();
        model.is_last_page(total_count.get())
    };

    let nav_button = move |title: &'static str,
                           icon_name: &'static str,
                           target: fn(usize, usize) -> usize,
                           disabled: Box<dyn Fn() -> bool + Send + Sync>| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || loading.get() || disabled()
                on:click=move |_| {
                    let next = target(current_page.get_untracked(), total_pages.get_untracked().max(1));
                    on_page_change.run(next);
                }
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button("Первая страница", "chevrons-left", |_, _| 0, Box::new(is_first))}
            {nav_button("Предыдущая страница", "chevron-left", |page, _| page.saturating_sub(1), Box::new(is_first))}
            <span class="pagination-info">
                {move || format!(
                    "Стр. {} из {} · записей: {}",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            {nav_button("Следующая страница", "chevron-right", |page, pages| (page + 1).min(pages - 1), Box::new(is_last))}
            {nav_button("Последняя страница", "chevrons-right", |_, pages| pages - 1, Box::new(is_last))}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / стр.", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
