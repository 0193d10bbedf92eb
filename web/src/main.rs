use dioxus::prelude::*;

use ui::views::FormContainer;

// Shared theme, inlined so web and desktop render from one stylesheet.
const MAIN_CSS_INLINE: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Title { "Sign Up" }

        main { class: "app",
            FormContainer {}
        }
    }
}
