//! Shared UI crate for Signform. Form logic and the views that render it live
//! here; the `web` and `desktop` crates only launch [`views::FormContainer`].

pub mod auth;
pub mod views;

pub mod components {
    mod field_input;
    pub use field_input::FieldInput;

    mod notification_box;
    pub use notification_box::NotificationBox;
}

/// Shared theme (ui/assets/theme/main.css), inlined by every platform shell.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
