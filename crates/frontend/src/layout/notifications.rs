//! Всплывающие уведомления (toasts) в правом нижнем углу
use crate::shared::data_view::Notifier;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Стек уведомлений; реализует [`Notifier`] для контроллеров
#[derive(Clone, Copy)]
pub struct NotificationStore {
    pub items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items
            .try_update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationStore {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let store =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || store.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <span class="toast__text">{toast.message}</span>
                            <button class="toast__close" title="Закрыть" on:click=move |_| store.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
