//! tab.key → View. Все ключи табов собраны здесь.

use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_sub_category::ui::list::SubCategoryList;
use crate::domain::a004_brand::ui::list::BrandList;
use crate::domain::a005_offer::ui::list::OfferList;
use crate::domain::a006_promo_code::ui::list::PromoCodeList;
use crate::domain::a007_banner::ui::list::BannerList;
use crate::domain::a008_order::ui::details::OrderDetails;
use crate::domain::a008_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::split_detail_key;
use crate::system::users::ui::details::UserDetails;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

/// Контент таба по ключу; неизвестный ключ даёт заглушку
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_category" => view! { <CategoryList /> }.into_any(),
        "a003_sub_category" => view! { <SubCategoryList /> }.into_any(),
        "a004_brand" => view! { <BrandList /> }.into_any(),
        "a005_offer" => view! { <OfferList /> }.into_any(),
        "a006_promo_code" => view! { <PromoCodeList /> }.into_any(),
        "a007_banner" => view! { <BannerList /> }.into_any(),
        "a008_order" => view! { <OrderList /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),
        _ => render_detail(key, tabs_store),
    }
}

fn render_detail(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let Some((list_key, raw_id)) = split_detail_key(key) else {
        return unknown_tab(key);
    };
    // Пустой id означает "нет записи": карточка сама вернёт к списку
    let id = Some(raw_id.to_string()).filter(|id| !id.is_empty());
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match list_key {
        "a001_product" => view! { <ProductDetails id=id on_close=on_close /> }.into_any(),
        "a008_order" => view! { <OrderDetails id=id on_close=on_close /> }.into_any(),
        "sys_users" => view! { <UserDetails id=id on_close=on_close /> }.into_any(),
        _ => unknown_tab(key),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log::warn!("no view registered for tab '{}'", key);
    let key = key.to_string();
    view! {
        <div class="placeholder">
            {format!("Раздел «{}» не найден", key)}
        </div>
    }
    .into_any()
}
