//! Sign-up form state machine.
//!
//! ```text
//! Editing --submit (valid)--> Submitting --Ok--> Success
//!    ^                            |
//!    +----------- Err ------------+
//! ```
//!
//! Field values are kept on failure so the user can correct and resubmit;
//! they are cleared on success.

use api::RegisterRequest;
use tracing::{debug, warn};

use super::field::{FieldId, FieldState, FieldStatus};
use super::rules::{is_valid_password, is_valid_username, passwords_match};
use super::submission::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Success,
}

/// Why a submit request did not start a registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A registration call is already in flight.
    InFlight,
    /// The form already completed successfully.
    Completed,
    /// Username or password failed the submit-time check ("Invalid Entry").
    InvalidEntry,
    /// The confirmation does not match the password.
    Mismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    username: FieldState,
    password: FieldState,
    confirm: FieldState,
    error: Option<SubmitError>,
    phase: FormPhase,
}

impl SignUpForm {
    pub const FIELDS: [FieldId; 3] = [FieldId::Username, FieldId::Password, FieldId::Confirm];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<SubmitError> {
        self.error
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
            FieldId::Confirm => &self.confirm,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::Username => &mut self.username,
            FieldId::Password => &mut self.password,
            FieldId::Confirm => &mut self.confirm,
        }
    }

    /// Records a keystroke. Any edit invalidates the last error.
    pub fn edit(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).set_value(value);
        self.error = None;
    }

    pub fn set_focus(&mut self, id: FieldId, focused: bool) {
        self.field_mut(id).set_focus(focused);
    }

    pub fn is_valid(&self, id: FieldId) -> bool {
        match id {
            FieldId::Username => is_valid_username(&self.username.value),
            FieldId::Password => is_valid_password(&self.password.value),
            FieldId::Confirm => passwords_match(&self.password.value, &self.confirm.value),
        }
    }

    pub fn status(&self, id: FieldId) -> FieldStatus {
        FieldStatus::new(id, self.field(id), self.is_valid(id))
    }

    pub fn form_valid(&self) -> bool {
        Self::FIELDS.iter().all(|id| self.is_valid(*id))
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.form_valid()
    }

    /// Moves to `Submitting` and hands back the request body to send.
    ///
    /// Username and password are checked again here, independent of what the
    /// rendered form showed; a failure sets "Invalid Entry" and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<RegisterRequest, SubmitBlocked> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitBlocked::InFlight),
            FormPhase::Success => return Err(SubmitBlocked::Completed),
            FormPhase::Editing => {}
        }

        if !is_valid_username(&self.username.value) || !is_valid_password(&self.password.value) {
            self.error = Some(SubmitError::InvalidEntry);
            return Err(SubmitBlocked::InvalidEntry);
        }
        if !self.is_valid(FieldId::Confirm) {
            return Err(SubmitBlocked::Mismatch);
        }

        self.phase = FormPhase::Submitting;
        debug!(user = %self.username.value, "sign-up submitting");
        Ok(RegisterRequest::new(
            self.username.value.clone(),
            self.password.value.clone(),
        ))
    }

    /// Applies the outcome of the registration call started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.phase != FormPhase::Submitting {
            warn!(phase = ?self.phase, "ignoring submit outcome outside of a submission");
            return;
        }

        match outcome {
            Ok(()) => {
                self.username.clear();
                self.password.clear();
                self.confirm.clear();
                self.error = None;
                self.phase = FormPhase::Success;
            }
            Err(err) => {
                self.error = Some(err);
                self.phase = FormPhase::Editing;
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.phase == FormPhase::Success
    }
}
