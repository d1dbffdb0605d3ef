use leptos::prelude::*;

use crate::domain::a005_offer::resource::Offers;
use crate::shared::components::resource_list::resource_list_view;

#[component]
#[allow(non_snake_case)]
pub fn OfferList() -> impl IntoView {
    resource_list_view::<Offers>(None)
}
