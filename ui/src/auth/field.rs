//! Per-field state. A field only stores what the user typed and whether it
//! has focus; validity is always computed by the owning form from the value.

/// Tracked inputs across both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username,
    Password,
    Confirm,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Confirm => "Confirm Password",
        }
    }

    pub fn hint(self) -> &'static [&'static str] {
        match self {
            Self::Username => super::rules::USERNAME_HINT,
            Self::Password => super::rules::PASSWORD_HINT,
            Self::Confirm => super::rules::CONFIRM_HINT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub focused: bool,
}

impl FieldState {
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Icon rendered next to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Valid,
    Invalid,
}

impl StatusIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Valid => "field__icon field__icon--valid",
            Self::Invalid => "field__icon field__icon--invalid",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Valid => "✓",
            Self::Invalid => "!",
        }
    }
}

/// Render-ready snapshot of one field: its state plus the validity derived
/// from the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub id: FieldId,
    pub value: String,
    pub focused: bool,
    pub valid: bool,
}

impl FieldStatus {
    pub fn new(id: FieldId, state: &FieldState, valid: bool) -> Self {
        Self {
            id,
            value: state.value.clone(),
            focused: state.focused,
            valid,
        }
    }

    /// The invalid icon only shows while the user is in the field.
    pub fn icon(&self) -> Option<StatusIcon> {
        if self.value.is_empty() {
            None
        } else if self.valid {
            Some(StatusIcon::Valid)
        } else if self.focused {
            Some(StatusIcon::Invalid)
        } else {
            None
        }
    }

    pub fn hint_visible(&self) -> bool {
        self.focused && !self.valid
    }
}
