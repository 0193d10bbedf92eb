//! Form logic with no rendering: validation rules, field state, the two form
//! state machines and the submission mapping.

pub mod field;
pub mod rules;
pub mod signin;
pub mod signup;
pub mod submission;
pub mod switch;

pub use field::{FieldId, FieldState, FieldStatus, StatusIcon};
pub use rules::{is_valid_password, is_valid_username, passwords_match};
pub use signin::{SignInForm, SignInOutcome};
pub use signup::{FormPhase, SignUpForm, SubmitBlocked};
pub use submission::{submit_registration, Registrar, SubmitError};
pub use switch::{ActiveForm, SuccessFlag};
