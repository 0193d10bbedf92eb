use dioxus::prelude::*;
use tracing::debug;

use crate::auth::{ActiveForm, SignInForm, SuccessFlag};
use crate::components::{FieldInput, NotificationBox};

#[component]
pub fn SignIn(success: Signal<SuccessFlag>) -> Element {
    let mut success = success;
    let mut form = use_signal(SignInForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = form.write().submit();
        debug!(?outcome, "sign-in submit");
    };

    let snapshot = form();

    rsx! {
        section { class: "auth-form auth-form--signin",
            div { class: "auth-form__header",
                h2 { class: "auth-form__title", "Sign In" }
                p { class: "auth-form__subtitle", "to your account" }
            }

            form { class: "auth-form__body", onsubmit: on_submit,
                if let Some(err) = snapshot.error() {
                    NotificationBox { title: "Error", description: err.to_string() }
                }

                for id in SignInForm::FIELDS {
                    FieldInput {
                        key: "{id:?}",
                        form: "signin",
                        status: snapshot.status(id),
                        on_input: move |value: String| form.write().edit(id, value),
                        on_focus: move |focused: bool| form.write().set_focus(id, focused),
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary auth-form__submit",
                    disabled: !snapshot.can_submit(),
                    "Sign In"
                }
            }

            p { class: "auth-form__footer",
                "Don't have an account?"
                a {
                    href: "#",
                    class: "auth-form__switch",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        success.write().show(ActiveForm::SignUp);
                    },
                    "Register"
                }
            }
        }
    }
}
