use leptos::prelude::*;

use crate::domain::a004_brand::resource::Brands;
use crate::shared::components::resource_list::resource_list_view;

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    resource_list_view::<Brands>(None)
}
