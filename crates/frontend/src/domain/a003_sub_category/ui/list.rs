use leptos::prelude::*;

use crate::domain::a003_sub_category::resource::SubCategories;
use crate::shared::components::resource_list::resource_list_view;

#[component]
#[allow(non_snake_case)]
pub fn SubCategoryList() -> impl IntoView {
    resource_list_view::<SubCategories>(None)
}
