//! Таблица серверного списка: заголовки с сортировкой, строки, пагинация
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::data_view::{ListFetcher, ServerPagination};
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;
use thaw::*;

/// Колонка таблицы
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Поле сортировки на сервере
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    /// Выравнивание вправо
    pub numeric: bool,
}

impl Column {
    pub const fn new(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            sortable: true,
            numeric: false,
        }
    }

    pub const fn fixed(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

/// Запись, которую умеет показывать [`DataTable`]
pub trait TableRecord: AdminRecord + Clone + Send + Sync + 'static {
    fn columns() -> Vec<Column>;

    /// Текст ячеек в порядке [`TableRecord::columns`]
    fn cells(&self) -> Vec<String>;
}

/// Текст пустой таблицы: до первого ответа и во время загрузки показываем загрузку
fn placeholder_text(loading: bool, loaded: bool) -> &'static str {
    if loading || !loaded {
        "Загрузка…"
    } else {
        "Нет данных"
    }
}

fn placeholder_row(column_count: usize, text: &'static str) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan=column_count.to_string()>
                <TableCellLayout>
                    <span class="text-muted">{text}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
    .into_any()
}

#[component]
pub fn DataTable<F>(
    list: ServerPagination<F>,
    /// Клик по строке
    on_open: Option<Callback<F::Row>>,
) -> impl IntoView
where
    F: ListFetcher + 'static,
    F::Row: TableRecord,
{
    let columns = F::Row::columns();
    let column_count = columns.len();
    let config = list.config();

    let is_loading = Signal::derive(move || list.view.with(|v| v.loading));
    let total_count = Signal::derive(move || list.view.with(|v| v.total));
    let current_page = Signal::derive(move || list.query.with(|q| q.page()));
    let page_size = Signal::derive(move || list.query.with(|q| q.page_size()));
    let total_pages =
        Signal::derive(move || list.query.with(|q| q.pagination.total_pages(total_count.get())));

    let sort_state = move || {
        list.query.with(|q| {
            q.primary_sort()
                .map(|(key, asc)| (key.to_string(), asc))
                .unwrap_or_default()
        })
    };

    let header_cells = columns
        .iter()
        .map(|column| {
            let column = *column;
            let style = if column.numeric { "text-align: right;" } else { "" };
            view! {
                <TableHeaderCell resizable=true min_width=100.0>
                    <div
                        class="table__sortable-header"
                        style=style
                        on:click=move |_| {
                            if column.sortable {
                                list.toggle_sort(column.key);
                            }
                        }
                    >
                        {column.title}
                        {column.sortable.then(|| view! {
                            <span class=move || get_sort_class(&sort_state().0, column.key)>
                                {move || {
                                    let (key, asc) = sort_state();
                                    get_sort_indicator(&key, column.key, asc)
                                }}
                            </span>
                        })}
                    </div>
                </TableHeaderCell>
            }
        })
        .collect_view();

    let body = move || {
        let (rows, loading, loaded) = list.view.with(|v| (v.rows.clone(), v.loading, v.loaded));
        if rows.is_empty() {
            return vec![placeholder_row(column_count, placeholder_text(loading, loaded))];
        }

        rows.into_iter()
            .map(|row| {
                let cells = row
                    .cells()
                    .into_iter()
                    .zip(F::Row::columns())
                    .map(|(text, column)| {
                        let class = if column.numeric { "table__cell--right" } else { "" };
                        view! {
                            <TableCell class=class>
                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                let row_for_click = row.clone();

                view! {
                    <TableRow
                        attr:class="table__row"
                        on:click=move |_| {
                            if let Some(on_open) = on_open {
                                on_open.run(row_for_click.clone());
                            }
                        }
                    >
                        {cells}
                    </TableRow>
                }
                .into_any()
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="data-table">
            {move || list.view.with(|v| v.error.clone()).map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e.to_string()}</span>
                </div>
            })}

            <div style="width: 100%; overflow-x: auto;" class:data-table--loading=move || is_loading.get()>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header_cells}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| list.set_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                page_size_options=config.page_size_options.clone()
                loading=is_loading
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shows_loading_until_first_response() {
        assert_eq!(placeholder_text(false, false), "Загрузка…");
        assert_eq!(placeholder_text(true, false), "Загрузка…");
        assert_eq!(placeholder_text(true, true), "Загрузка…");
        assert_eq!(placeholder_text(false, true), "Нет данных");
    }
}
