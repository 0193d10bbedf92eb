use dioxus::prelude::*;

use crate::auth::{FieldId, FieldStatus};

fn input_type(id: FieldId) -> &'static str {
    match id {
        FieldId::Username => "text",
        FieldId::Password | FieldId::Confirm => "password",
    }
}

fn input_name(id: FieldId) -> &'static str {
    match id {
        FieldId::Username => "username",
        FieldId::Password => "password",
        FieldId::Confirm => "confirm_pwd",
    }
}

/// Labeled input with its status icon and the inline hint panel.
///
/// `form` prefixes the DOM id so the two forms never share ids.
#[component]
pub fn FieldInput(
    form: &'static str,
    status: FieldStatus,
    on_input: EventHandler<String>,
    on_focus: EventHandler<bool>,
    #[props(default)] autofocus: bool,
) -> Element {
    let id = status.id;
    let dom_id = format!("{form}_{}", input_name(id));
    let icon = status.icon();
    let hint_id = format!("{dom_id}_hint");

    rsx! {
        div { class: "field",
            label { class: "field__label", r#for: "{dom_id}", {id.label()} }
            div { class: "field__control",
                input {
                    id: "{dom_id}",
                    name: "{dom_id}",
                    class: "field__input",
                    r#type: input_type(id),
                    autocomplete: "off",
                    autofocus: autofocus,
                    required: true,
                    value: "{status.value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    onfocus: move |_| on_focus.call(true),
                    onblur: move |_| on_focus.call(false),
                }
                if let Some(icon) = icon {
                    span { class: icon.css_class(), aria_hidden: "true", {icon.glyph()} }
                }
            }
            if status.hint_visible() {
                div { id: "{hint_id}", class: "field__hint",
                    span { class: "field__hint-icon", aria_hidden: "true", "i" }
                    div { class: "field__hint-lines",
                        for line in id.hint().iter() {
                            p { key: "{line}", {*line} }
                        }
                    }
                }
            }
        }
    }
}
