use dioxus::prelude::*;

use crate::auth::{ActiveForm, SuccessFlag};

use super::{SignIn, SignUp};

/// Page root. Owns the success flag and passes the same handle to whichever
/// form is on screen.
#[component]
pub fn FormContainer() -> Element {
    let success = use_signal(SuccessFlag::default);

    rsx! {
        div { class: "auth-layout",
            div { class: "auth-layout__panel",
                FormBox { success: success }
            }
            div { class: "auth-layout__art", aria_hidden: "true" }
        }
    }
}

#[component]
fn FormBox(success: Signal<SuccessFlag>) -> Element {
    match success().active_form() {
        ActiveForm::SignUp => rsx! { SignUp { success: success } },
        ActiveForm::SignIn => rsx! { SignIn { success: success } },
    }
}
