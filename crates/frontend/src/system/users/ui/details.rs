use std::rc::Rc;

use contracts::shared::record::AdminRecord;
use contracts::system::users::{User, UserSummary};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationStore;
use crate::shared::components::detail::{
    confirm_and_delete, entity_state_view, DetailActions, FieldRow, SummaryPlaceholder,
};
use crate::shared::data_view::use_detail_with_summary;
use crate::shared::list_utils::{format_flag, format_money, format_timestamp, or_dash};
use crate::shared::resource::{AdminResource, RestDetail};
use crate::system::users::resource::Users;

fn user_fields(u: &User) -> AnyView {
    view! {
        <div class="details-grid">
            <FieldRow label="Логин" value=u.username.clone() />
            <FieldRow label="ФИО" value=or_dash(u.full_name.as_deref()) />
            <FieldRow label="Email" value=or_dash(u.email.as_deref()) />
            <FieldRow label="Телефон" value=or_dash(u.phone.as_deref()) />
            <FieldRow label="Роль" value=u.role.label() />
            <FieldRow label="Активен" value=format_flag(u.is_active) />
            <FieldRow label="Последний вход" value=or_dash(u.last_login_at.as_deref().map(format_timestamp).as_deref()) />
            <FieldRow label="Создан" value=format_timestamp(&u.created_at) />
        </div>
    }
    .into_any()
}

fn summary_block(s: &UserSummary) -> AnyView {
    view! {
        <div class="details-summary">
            <h3>"Покупки"</h3>
            <div class="details-grid">
                <FieldRow label="Заказов" value=s.orders_count.to_string() />
                <FieldRow label="Потрачено" value=format_money(s.total_spent) />
                <FieldRow label="Последний заказ" value=or_dash(s.last_order_at.as_deref().map(format_timestamp).as_deref()) />
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn UserDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let toasts =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    let tab_key = id.as_deref().map(Users::detail_key);
    let detail = use_detail_with_summary(
        RestDetail::<Users>::new(),
        id,
        Users::TAB_KEY,
        Rc::new(ctx),
        Rc::new(toasts),
    );

    let phase = Signal::derive(move || detail.view.with(|v| v.phase));
    let busy = Signal::derive(move || phase.get().is_loading());

    let on_delete = Callback::new(move |_| {
        let Some(user) = detail.view.with_untracked(|v| v.entity.clone()) else {
            return;
        };
        let key = tab_key.clone();
        confirm_and_delete::<Users>(
            user,
            toasts,
            Callback::new(move |_| {
                if let Some(key) = key.as_deref() {
                    ctx.close_tab(key);
                }
                ctx.open_tab(Users::TAB_KEY, Users::TITLE);
            }),
        );
    });

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>
                    {move || detail.view.with(|v| {
                        v.entity
                            .as_ref()
                            .map(|u| u.display_name())
                            .unwrap_or_else(|| "Пользователь".to_string())
                    })}
                </h2>
                <DetailActions
                    on_reload=Callback::new(move |_| detail.reload())
                    on_delete=on_delete
                    on_close=on_close
                    busy=busy
                />
            </div>
            {move || detail.view.with(|v| match &v.entity {
                Some(user) => view! {
                    {user_fields(user)}
                    {v.summary.as_ref().map(summary_block)}
                }
                .into_any(),
                None => entity_state_view(v.phase),
            })}
            <SummaryPlaceholder phase=phase />
        </div>
    }
}
