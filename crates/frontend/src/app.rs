use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationStore;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    // Toasts for list/detail errors and delete confirmations
    provide_context(NotificationStore::new());

    view! {
        <AppRoutes />
    }
}
