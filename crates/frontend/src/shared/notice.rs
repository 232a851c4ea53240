use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Сколько уведомление остаётся на экране
const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Кнопка действия внутри уведомления ("Reenviar" и т.п.)
#[derive(Clone)]
pub struct NoticeAction {
    pub label: String,
    pub on_run: Callback<()>,
}

#[derive(Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub action: Option<NoticeAction>,
}

/// Сервис всплывающих уведомлений (toast)
///
/// Использование:
/// ```ignore
/// let notices = use_context::<NoticeService>().unwrap();
/// notices.error("Opa algo de errado aconteceu");
/// ```
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, action: Option<NoticeAction>) -> u64 {
        self.push(NoticeKind::Success, title.into(), action)
    }

    pub fn error(&self, title: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, title.into(), None)
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, title: String, action: Option<NoticeAction>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::debug!("notice #{} ({:?}): {}", id, kind, title);
        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                title,
                action,
            })
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            this.dismiss(id);
        });
        id
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Область вывода уведомлений, монтируется один раз в корне приложения
#[component]
pub fn NoticeViewport() -> impl IntoView {
    let service = use_context::<NoticeService>().expect("NoticeService not provided in context");

    view! {
        <div class="notice-viewport" role="status" aria-live="polite">
            <For
                each=move || service.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let (class, icon_name) = match notice.kind {
                        NoticeKind::Success => ("notice notice--success", "check-circle"),
                        NoticeKind::Error => ("notice notice--error", "x-circle"),
                    };
                    view! {
                        <div class=class>
                            <span class="notice__icon">{icon(icon_name)}</span>
                            <span class="notice__title">{notice.title.clone()}</span>
                            {notice.action.clone().map(|NoticeAction { label, on_run }| view! {
                                <button
                                    type="button"
                                    class="notice__action"
                                    on:click=move |_| {
                                        service.dismiss(id);
                                        on_run.run(());
                                    }
                                >
                                    {label}
                                </button>
                            })}
                            <button
                                type="button"
                                class="notice__close"
                                aria-label="Fechar"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
