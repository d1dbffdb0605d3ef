//! Центральная область: полоса табов и их содержимое

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let key = tab.key.clone();
    let key_for_active = key.clone();
    let is_active = Memo::new(move |_| {
        ctx.active.with(|active| active.as_deref() == Some(key_for_active.as_str()))
    });

    let key_for_click = key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key);
    };

    // Заголовок может смениться после загрузки карточки
    let key_for_title = tab.key.clone();
    let title = move || {
        ctx.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key_for_title)
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div
            class="tab"
            class:tab--active=is_active
            on:click=move |_| ctx.activate_tab(&key_for_click)
        >
            <span class="tab__title">{title}</span>
            <button class="tab__close" title="Закрыть" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHandle tab=tab /> }
                />
            </div>
            <Show
                when=move || ctx.opened.with(|tabs| !tabs.is_empty())
                fallback=|| view! { <div class="tabs__empty">"Выберите раздел в меню слева"</div> }
            >
                <div class="tabs__content">
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab tabs_store=ctx /> }
                    />
                </div>
            </Show>
        </div>
    }
}
