use leptos::prelude::*;

/// Establishment registration entry point linked from the sign-in page
#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="sign-in">
            <a href="/sign-in" class="button button--outline sign-in__new-account">
                "Fazer login"
            </a>

            <div class="sign-in__box">
                <div class="sign-in__heading">
                    <h1 class="sign-in__title">"Criar conta grátis"</h1>
                    <p class="sign-in__subtitle">
                        "Seja um parceiro e comece suas vendas! O cadastro de novos estabelecimentos é feito pela nossa equipe comercial."
                    </p>
                </div>
            </div>
        </div>
    }
}
