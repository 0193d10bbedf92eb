use dioxus::prelude::*;

/// Error banner rendered above a form while it has a message to show.
#[component]
pub fn NotificationBox(title: String, description: String) -> Element {
    rsx! {
        div { class: "notification notification--error", role: "alert",
            p { class: "notification__title", "{title}" }
            p { class: "notification__description", "{description}" }
        }
    }
}
