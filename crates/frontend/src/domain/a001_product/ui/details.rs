use std::rc::Rc;

use contracts::domain::a001_product::aggregate::{Product, ProductSummary};
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;

use crate::domain::a001_product::resource::Products;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationStore;
use crate::shared::components::detail::{
    confirm_and_delete, entity_state_view, DetailActions, FieldRow, SummaryPlaceholder,
};
use crate::shared::data_view::use_detail_with_summary;
use crate::shared::list_utils::{format_money, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, RestDetail};

fn product_fields(p: &Product) -> AnyView {
    view! {
        <div class="details-grid">
            <FieldRow label="Артикул" value=p.sku.clone() />
            <FieldRow label="Наименование" value=p.name.clone() />
            <FieldRow label="Категория" value=or_dash(p.category_name.as_deref()) />
            <FieldRow label="Бренд" value=or_dash(p.brand_name.as_deref()) />
            <FieldRow label="Цена" value=format_money(p.price) />
            <FieldRow label="Остаток" value=p.stock.to_string() />
            <FieldRow label="Статус" value=p.status.label() />
            <FieldRow label="Создан" value=format_timestamp(&p.created_at) />
            <FieldRow label="Описание" value=or_dash(p.description.as_deref()) />
        </div>
    }
    .into_any()
}

fn summary_block(s: &ProductSummary) -> AnyView {
    view! {
        <div class="details-summary">
            <h3>"Продажи"</h3>
            <div class="details-grid">
                <FieldRow label="На складе" value=s.stock_on_hand.to_string() />
                <FieldRow label="Продано, шт." value=s.units_sold.to_string() />
                <FieldRow label="Выручка" value=format_money(s.revenue) />
                <FieldRow label="Открытых заказов" value=s.open_orders.to_string() />
            </div>
        </div>
    }
    .into_any()
}

/// Карточка товара. Без `id` сразу возвращает к списку.
#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let toasts =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    let tab_key = id.as_deref().map(Products::detail_key);
    let detail = use_detail_with_summary(
        RestDetail::<Products>::new(),
        id,
        Products::TAB_KEY,
        Rc::new(ctx),
        Rc::new(toasts),
    );

    let phase = Signal::derive(move || detail.view.with(|v| v.phase));
    let busy = Signal::derive(move || phase.get().is_loading());

    if let Some(key) = tab_key.clone() {
        Effect::new(move |_| {
            if let Some(name) = detail
                .view
                .with(|v| v.entity.as_ref().map(|p| p.display_name()))
            {
                ctx.update_tab_title(&key, &name);
            }
        });
    }

    let on_delete = Callback::new(move |_| {
        let Some(product) = detail.view.with_untracked(|v| v.entity.clone()) else {
            return;
        };
        let key = tab_key.clone();
        confirm_and_delete::<Products>(
            product,
            toasts,
            Callback::new(move |_| {
                if let Some(key) = key.as_deref() {
                    ctx.close_tab(key);
                }
                ctx.open_tab(Products::TAB_KEY, Products::TITLE);
            }),
        );
    });

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>{move || detail.view.with(|v| v.entity.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "Товар".to_string()))}</h2>
                <DetailActions
                    on_reload=Callback::new(move |_| detail.reload())
                    on_delete=on_delete
                    on_close=on_close
                    busy=busy
                />
            </div>
            {move || detail.view.with(|v| match &v.entity {
                Some(product) => view! {
                    {product_fields(product)}
                    {v.summary.as_ref().map(summary_block)}
                }
                .into_any(),
                None => entity_state_view(v.phase),
            })}
            <SummaryPlaceholder phase=phase />
        </div>
    }
}
