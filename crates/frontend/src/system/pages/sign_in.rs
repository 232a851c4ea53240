use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::notice::{NoticeAction, NoticeService};
use crate::shared::query_store::{BrowserQueryStore, QueryParams, QueryStore};
use crate::system::auth::api;
use crate::system::auth::sign_in::{submit_sign_in, SignInError, SignInForm};

const LINK_SENT_TITLE: &str = "Enviamos um link de autenticação para seu e-mail";
const FAILURE_TITLE: &str = "Opa algo de errado aconteceu";

#[component]
pub fn SignInPage() -> impl IntoView {
    let store = use_context::<BrowserQueryStore>().unwrap_or_default();
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let initial = SignInForm::from_query(&QueryParams::parse(&store.search()));
    let email = RwSignal::new(initial.email);
    let validation_error = RwSignal::new(Option::<String>::None);
    let is_submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignInForm {
            email: email.get_untracked(),
        };
        send_sign_in(form, notices, validation_error, is_submitting);
    };

    view! {
        <div class="sign-in">
            <a href="/sign-up" class="button button--outline sign-in__new-account">
                "Novo Estabelecimento"
            </a>

            <div class="sign-in__box">
                <div class="sign-in__heading">
                    <h1 class="sign-in__title">"Acessar painel"</h1>
                    <p class="sign-in__subtitle">"Acompanhe suas vendas pelo painel do parceiro!"</p>
                </div>

                <form class="sign-in__form" on:submit=on_submit>
                    <Input
                        id="email"
                        label="Seu e-mail"
                        input_type="email"
                        autocomplete="email"
                        value=Signal::derive(move || email.get())
                        on_input=Callback::new(move |value: String| {
                            email.set(value);
                            validation_error.set(None);
                        })
                    />

                    {move || validation_error.get().map(|msg| view! {
                        <p class="form__error">{msg}</p>
                    })}

                    <Button
                        button_type="submit"
                        class="button--block"
                        disabled=Signal::derive(move || is_submitting.get())
                    >
                        "Acessar Painel"
                    </Button>
                </form>
            </div>
        </div>
    }
}

/// Sends the sign-in link; a no-op while a previous send is outstanding.
fn send_sign_in(
    form: SignInForm,
    notices: NoticeService,
    validation_error: RwSignal<Option<String>>,
    is_submitting: RwSignal<bool>,
) {
    if is_submitting.get_untracked() {
        log::debug!("sign-in already in flight, ignoring");
        return;
    }
    is_submitting.set(true);

    spawn_local(async move {
        let result =
            submit_sign_in(&form, |request| async move { api::sign_in(&request).await }).await;
        is_submitting.set(false);

        match result {
            Ok(request) => {
                log::info!("sign-in link requested for {}", request.email);
                validation_error.set(None);

                let resend_form = SignInForm {
                    email: request.email,
                };
                let resend = Callback::new(move |_: ()| {
                    send_sign_in(resend_form.clone(), notices, validation_error, is_submitting)
                });
                notices.success(
                    LINK_SENT_TITLE,
                    Some(NoticeAction {
                        label: "Reenviar".to_string(),
                        on_run: resend,
                    }),
                );
            }
            Err(SignInError::Validation(msg)) => validation_error.set(Some(msg)),
            Err(e @ SignInError::RequestFailure(_)) => {
                log::warn!("{}", e);
                notices.error(FAILURE_TITLE);
            }
        }
    });
}
