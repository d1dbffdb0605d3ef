use contracts::system::users::User;
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::resource_list::resource_list_view;
use crate::shared::resource::AdminResource;
use crate::system::users::resource::Users;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    resource_list_view::<Users>(Some(Callback::new(move |user: User| {
        ctx.open_tab(&Users::detail_key(&user.id), &user.display_name());
    })))
}
