use contracts::domain::a008_order::aggregate::Order;
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;

use crate::domain::a008_order::resource::Orders;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::resource_list::resource_list_view;
use crate::shared::resource::AdminResource;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    resource_list_view::<Orders>(Some(Callback::new(move |order: Order| {
        ctx.open_tab(&Orders::detail_key(&order.id), &order.display_name());
    })))
}
