use leptos::prelude::*;

use crate::domain::a006_promo_code::resource::PromoCodes;
use crate::shared::components::resource_list::resource_list_view;

#[component]
#[allow(non_snake_case)]
pub fn PromoCodeList() -> impl IntoView {
    resource_list_view::<PromoCodes>(None)
}
