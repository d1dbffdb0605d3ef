//! Верхняя панель: переключатель меню, название, контекст продавца

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_sidebar_visible = move || ctx.left_open.get();

    let scope = move || {
        ctx.view_context.with(|c| match (&c.vendor_id, &c.branch_id) {
            (Some(vendor), Some(branch)) => format!("Продавец {} · филиал {}", vendor, branch),
            (Some(vendor), None) => format!("Продавец {}", vendor),
            _ => "Все продавцы".to_string(),
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("chevron-left")
                    } else {
                        icon("chevron-right")
                    }}
                </button>
                <span class="top-header__title">"Панель продавца"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{scope}</span>
                </div>
            </div>
        </div>
    }
}
