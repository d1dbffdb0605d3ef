use std::rc::Rc;

use contracts::domain::a008_order::aggregate::{Order, OrderSummary};
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_order::resource::Orders;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationStore;
use crate::shared::components::detail::{
    confirm_and_delete, entity_state_view, DetailActions, FieldRow, SummaryPlaceholder,
};
use crate::shared::data_view::use_detail_with_summary;
use crate::shared::list_utils::{format_money, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, RestDetail};

fn order_fields(o: &Order) -> AnyView {
    view! {
        <div class="details-grid">
            <FieldRow label="Номер" value=o.order_no.clone() />
            <FieldRow label="Статус" value=o.status.label() />
            <FieldRow label="Покупатель" value=o.customer_name.clone() />
            <FieldRow label="Телефон" value=or_dash(o.customer_phone.as_deref()) />
            <FieldRow label="Позиций" value=o.items_count.to_string() />
            <FieldRow label="Промокод" value=or_dash(o.promo_code.as_deref()) />
            <FieldRow label="Создан" value=format_timestamp(&o.created_at) />
        </div>
    }
    .into_any()
}

/// Состав заказа и итоги
fn summary_block(s: &OrderSummary) -> AnyView {
    let lines = s
        .lines
        .iter()
        .map(|line| {
            let name = line.product_name.clone();
            let quantity = line.quantity.to_string();
            let price = format_money(line.unit_price);
            let amount = format_money(line.amount());
            view! {
                <TableRow>
                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{amount}</TableCellLayout></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="details-summary">
            <h3>"Состав заказа"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Товар"</TableHeaderCell>
                        <TableHeaderCell>"Кол-во"</TableHeaderCell>
                        <TableHeaderCell>"Цена"</TableHeaderCell>
                        <TableHeaderCell>"Сумма"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{lines}</TableBody>
            </Table>
            <div class="details-grid details-totals">
                <FieldRow label="Подытог" value=format_money(s.subtotal) />
                <FieldRow label="Скидка" value=format_money(s.discount) />
                <FieldRow label="Доставка" value=format_money(s.delivery) />
                <FieldRow label="Итого" value=format_money(s.total) />
            </div>
        </div>
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let toasts =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    let tab_key = id.as_deref().map(Orders::detail_key);
    let detail = use_detail_with_summary(
        RestDetail::<Orders>::new(),
        id,
        Orders::TAB_KEY,
        Rc::new(ctx),
        Rc::new(toasts),
    );

    let phase = Signal::derive(move || detail.view.with(|v| v.phase));
    let busy = Signal::derive(move || phase.get().is_loading());

    let on_delete = Callback::new(move |_| {
        let Some(order) = detail.view.with_untracked(|v| v.entity.clone()) else {
            return;
        };
        let key = tab_key.clone();
        confirm_and_delete::<Orders>(
            order,
            toasts,
            Callback::new(move |_| {
                if let Some(key) = key.as_deref() {
                    ctx.close_tab(key);
                }
                ctx.open_tab(Orders::TAB_KEY, Orders::TITLE);
            }),
        );
    });

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>
                    {move || detail.view.with(|v| match &v.entity {
                        Some(order) => order.display_name(),
                        None => "Заказ".to_string(),
                    })}
                </h2>
                <DetailActions
                    on_reload=Callback::new(move |_| detail.reload())
                    on_delete=on_delete
                    on_close=on_close
                    busy=busy
                />
            </div>
            {move || detail.view.with(|v| match &v.entity {
                Some(order) => view! {
                    {order_fields(order)}
                    {v.summary.as_ref().map(summary_block)}
                }
                .into_any(),
                None => entity_state_view(v.phase),
            })}
            <SummaryPlaceholder phase=phase />
        </div>
    }
}
