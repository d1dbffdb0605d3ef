//! Общие части карточек записей: поля, блок сводки, удаление
use contracts::shared::record::AdminRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::NotificationStore;
use crate::shared::data_view::{DetailPhase, Notifier};
use crate::shared::icons::icon;
use crate::shared::resource::{delete_record, AdminResource};

/// Строка "название: значение"
#[component]
pub fn FieldRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="details-field">
            <span class="details-field__label">{label}</span>
            <span class="details-field__value">{value}</span>
        </div>
    }
}

/// Заглушка блока сводки, пока её нет
#[component]
pub fn SummaryPlaceholder(#[prop(into)] phase: Signal<DetailPhase>) -> impl IntoView {
    move || match phase.get() {
        DetailPhase::LoadingSummary => view! {
            <div class="details-summary details-summary--loading">
                <Spinner />
                <span>"Загрузка сводки…"</span>
            </div>
        }
        .into_any(),
        DetailPhase::SummaryFailed => view! {
            <div class="details-summary details-summary--empty">"Сводка недоступна"</div>
        }
        .into_any(),
        _ => view! { <></> }.into_any(),
    }
}

/// Состояние карточки до загрузки записи
pub fn entity_state_view(phase: DetailPhase) -> AnyView {
    match phase {
        DetailPhase::EntityFailed | DetailPhase::Redirected => view! {
            <div class="details-empty">"Запись недоступна"</div>
        }
        .into_any(),
        _ => view! {
            <div class="details-loading">
                <Spinner />
                <span>"Загрузка…"</span>
            </div>
        }
        .into_any(),
    }
}

/// Спрашивает подтверждение и удаляет запись, передавая её штамп версии
pub fn confirm_and_delete<R: AdminResource>(
    record: R::Row,
    toasts: NotificationStore,
    on_deleted: Callback<()>,
) {
    let name = record.display_name();
    let confirmed = web_sys::window()
        .and_then(|w| w.confirm_with_message(&format!("Удалить «{}»?", name)).ok())
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    spawn_local(async move {
        match delete_record::<R>(&record).await {
            Ok(()) => {
                log::info!("{} {} deleted", R::PATH, record.id());
                toasts.success(&format!("«{}» удалено", name));
                on_deleted.run(());
            }
            Err(e) => {
                log::error!("failed to delete {} {}: {}", R::PATH, record.id(), e);
                toasts.error(&e.to_string());
            }
        }
    });
}

/// Кнопки карточки: обновить, удалить, закрыть
#[component]
pub fn DetailActions(
    on_reload: Callback<()>,
    on_delete: Callback<()>,
    on_close: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="details-actions">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_reload.run(()) disabled=busy>
                {icon("refresh")}
                " Обновить"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_delete.run(()) disabled=busy>
                {icon("delete")}
                " Удалить"
            </Button>
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                {icon("x")}
                " Закрыть"
            </Button>
        </div>
    }
}
