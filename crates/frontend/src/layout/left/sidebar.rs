//! Боковое меню: группы разделов, клик открывает таб

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    /// (ключ таба, иконка)
    items: Vec<(&'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Каталог",
            items: vec![
                ("a001_product", "products"),
                ("a002_category", "categories"),
                ("a003_sub_category", "categories"),
                ("a004_brand", "brands"),
            ],
        },
        MenuGroup {
            id: "marketing",
            label: "Маркетинг",
            items: vec![
                ("a005_offer", "offers"),
                ("a006_promo_code", "offers"),
                ("a007_banner", "banners"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Продажи",
            items: vec![("a008_order", "orders")],
        },
        MenuGroup {
            id: "settings",
            label: "Настройки",
            items: vec![("sys_users", "users")],
        },
    ]
}

/// Колонка меню; скрывается через `left_open`
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || !collapsed.with(|ids| ids.contains(&group_id));
                let toggle = move |_| {
                    collapsed.update(|ids| {
                        if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                            ids.remove(pos);
                        } else {
                            ids.push(group_id);
                        }
                    })
                };

                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__item app-sidebar__item--group" on:click=toggle>
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    let title = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            on:click=move |_| ctx.open_tab(key, &title)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
