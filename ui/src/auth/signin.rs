//! Sign-in form state. Field wiring matches sign-up minus the confirmation.
//!
//! There is no sign-in endpoint yet, so [`SignInForm::submit`] never performs
//! a network call: it reports [`SignInOutcome::NotImplemented`] and surfaces
//! [`SubmitError::SignInUnavailable`] to the user.

use tracing::info;

use super::field::{FieldId, FieldState, FieldStatus};
use super::rules::{is_valid_password, is_valid_username};
use super::submission::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The form is not valid; nothing happened.
    Blocked,
    /// Sign-in has no backend contract yet.
    NotImplemented,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    username: FieldState,
    password: FieldState,
    error: Option<SubmitError>,
}

impl SignInForm {
    pub const FIELDS: [FieldId; 2] = [FieldId::Username, FieldId::Password];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<SubmitError> {
        self.error
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).map_or("", |field| field.value.as_str())
    }

    fn field(&self, id: FieldId) -> Option<&FieldState> {
        match id {
            FieldId::Username => Some(&self.username),
            FieldId::Password => Some(&self.password),
            FieldId::Confirm => None,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut FieldState> {
        match id {
            FieldId::Username => Some(&mut self.username),
            FieldId::Password => Some(&mut self.password),
            FieldId::Confirm => None,
        }
    }

    /// Records a keystroke. Edits to a field this form does not track are ignored.
    pub fn edit(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(field) = self.field_mut(id) {
            field.set_value(value);
            self.error = None;
        }
    }

    pub fn set_focus(&mut self, id: FieldId, focused: bool) {
        if let Some(field) = self.field_mut(id) {
            field.set_focus(focused);
        }
    }

    pub fn is_valid(&self, id: FieldId) -> bool {
        match id {
            FieldId::Username => is_valid_username(&self.username.value),
            FieldId::Password => is_valid_password(&self.password.value),
            FieldId::Confirm => false,
        }
    }

    pub fn status(&self, id: FieldId) -> FieldStatus {
        let empty = FieldState::default();
        FieldStatus::new(id, self.field(id).unwrap_or(&empty), self.is_valid(id))
    }

    pub fn form_valid(&self) -> bool {
        Self::FIELDS.iter().all(|id| self.is_valid(*id))
    }

    pub fn can_submit(&self) -> bool {
        self.form_valid()
    }

    pub fn submit(&mut self) -> SignInOutcome {
        if !self.form_valid() {
            return SignInOutcome::Blocked;
        }
        info!(user = %self.username.value, "sign-in requested but not implemented");
        self.error = Some(SubmitError::SignInUnavailable);
        SignInOutcome::NotImplemented
    }
}
