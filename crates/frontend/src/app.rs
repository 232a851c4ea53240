use crate::routes::AppRoutes;
use crate::shared::notice::{NoticeService, NoticeViewport};
use crate::shared::query_store::BrowserQueryStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The page URL is the shared store for filters; pages receive it from here.
    provide_context(BrowserQueryStore);

    // Toast-style notices (sign-in confirmation, failures)
    provide_context(NoticeService::new());

    view! {
        <AppRoutes />
        <NoticeViewport />
    }
}
