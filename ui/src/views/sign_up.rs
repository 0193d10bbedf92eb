use api::RegisterClient;
use dioxus::prelude::*;
use tracing::debug;

use crate::auth::{submit_registration, ActiveForm, FieldId, FormPhase, SignUpForm, SuccessFlag};
use crate::components::{FieldInput, NotificationBox};

#[component]
pub fn SignUp(success: Signal<SuccessFlag>) -> Element {
    let mut success = success;
    let mut form = use_signal(SignUpForm::new);
    let client = use_hook(RegisterClient::from_env);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let request = match form.write().begin_submit() {
            Ok(request) => request,
            Err(blocked) => {
                debug!(?blocked, "sign-up submit blocked");
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let outcome = submit_registration(&client, &request).await;
            form.write().finish_submit(outcome);
            if form.read().is_success() {
                success.write().set(true);
            }
        });
    };

    let snapshot = form();
    let submitting = snapshot.phase() == FormPhase::Submitting;

    rsx! {
        section { class: "auth-form auth-form--signup",
            div { class: "auth-form__header",
                h2 { class: "auth-form__title", "Sign Up" }
                p { class: "auth-form__subtitle", "and start your 14-day free trial" }
            }

            form { class: "auth-form__body", onsubmit: on_submit,
                if let Some(err) = snapshot.error() {
                    NotificationBox { title: "Error", description: err.to_string() }
                }

                for id in SignUpForm::FIELDS {
                    FieldInput {
                        key: "{id:?}",
                        form: "signup",
                        status: snapshot.status(id),
                        autofocus: id == FieldId::Username,
                        on_input: move |value: String| form.write().edit(id, value),
                        on_focus: move |focused: bool| form.write().set_focus(id, focused),
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary auth-form__submit",
                    disabled: !snapshot.can_submit(),
                    if submitting { "Signing up..." } else { "Sign up" }
                }
            }

            p { class: "auth-form__footer",
                "Already registered?"
                a {
                    href: "#",
                    class: "auth-form__switch",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        success.write().show(ActiveForm::SignIn);
                    },
                    "Sign In"
                }
            }
        }
    }
}
