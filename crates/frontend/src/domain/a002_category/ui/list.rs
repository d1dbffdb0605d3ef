use leptos::prelude::*;

use crate::domain::a002_category::resource::Categories;
use crate::shared::components::resource_list::resource_list_view;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    resource_list_view::<Categories>(None)
}
