use leptos::prelude::*;

use crate::domain::a007_banner::resource::Banners;
use crate::shared::components::resource_list::resource_list_view;

#[component]
#[allow(non_snake_case)]
pub fn BannerList() -> impl IntoView {
    resource_list_view::<Banners>(None)
}
