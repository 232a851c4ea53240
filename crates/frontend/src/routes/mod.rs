use crate::domain::orders::ui::list::OrdersPage;
use crate::system::pages::sign_in::SignInPage;
use crate::system::pages::sign_up::SignUpPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Página não encontrada"</h1>
            <a href="/" class="table__link">"Voltar para o painel"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=OrdersPage />
                <Route path=path!("/sign-in") view=SignInPage />
                <Route path=path!("/sign-up") view=SignUpPage />
            </Routes>
        </Router>
    }
}
