pub mod global_context;
pub mod left;
pub mod notifications;
pub mod tabs;
pub mod top_header;
pub mod workspace;

use leptos::prelude::*;
use notifications::NotificationStack;
use top_header::TopHeader;

/// Каркас приложения
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |   Workspace (tabs) |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div class="app-main">
                    {center()}
                </div>
            </div>
            <NotificationStack />
        </div>
    }
}
