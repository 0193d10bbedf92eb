//! The flag shared by both forms that decides which one is on screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveForm {
    SignUp,
    SignIn,
}

/// `true` once a registration succeeded. The container owns it and hands the
/// same handle to both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuccessFlag(bool);

impl SuccessFlag {
    pub fn get(self) -> bool {
        self.0
    }

    pub fn set(&mut self, value: bool) {
        self.0 = value;
    }

    pub fn active_form(self) -> ActiveForm {
        if self.0 {
            ActiveForm::SignIn
        } else {
            ActiveForm::SignUp
        }
    }

    /// Footer links jump between the forms through the same flag.
    pub fn show(&mut self, form: ActiveForm) {
        self.0 = form == ActiveForm::SignIn;
    }
}
