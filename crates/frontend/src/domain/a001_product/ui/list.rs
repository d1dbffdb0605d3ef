use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;

use crate::domain::a001_product::resource::Products;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::resource_list::resource_list_view;
use crate::shared::resource::AdminResource;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let open_details = Callback::new(move |row: Product| {
        ctx.open_tab(&Products::detail_key(&row.id), &row.display_name());
    });

    resource_list_view::<Products>(Some(open_details))
}
