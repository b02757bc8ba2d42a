//! Password visibility: the eye control on the login form.
//!
//! The field's mode lives in the input's `type` attribute. Each click flips
//! it and rewrites the eye label to name the action the next click will
//! perform, so a revealed field shows the hide label.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use crate::config::EyeLabels;
use crate::consts::{INPUT_TYPE_MASKED, INPUT_TYPE_REVEALED};
use crate::patch::{Patch, Target, Update};

/// Display mode of the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordMode {
    /// Characters are hidden (`type="password"`).
    #[default]
    Masked,
    /// Characters are shown as plain text.
    Revealed,
}

impl PasswordMode {
    /// Read the mode from an input `type` value.
    ///
    /// Only `"password"` counts as masked; any other type is treated as
    /// revealed.
    #[must_use]
    pub fn from_input_type(value: &str) -> Self {
        if value == INPUT_TYPE_MASKED { Self::Masked } else { Self::Revealed }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => INPUT_TYPE_MASKED,
            Self::Revealed => INPUT_TYPE_REVEALED,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// Eye label to display while the field is in this mode.
    #[must_use]
    pub fn label(self, labels: &EyeLabels) -> &str {
        match self {
            Self::Masked => &labels.show,
            Self::Revealed => &labels.hide,
        }
    }
}

/// Handle a click on the eye control.
#[must_use]
pub fn on_eye_click(current: PasswordMode, labels: &EyeLabels) -> Update<'_, PasswordMode> {
    let next = current.toggled();
    Update {
        next,
        patches: vec![
            Patch::SetInputType { value: next.input_type() },
            Patch::SetText { target: Target::EyeControl, text: next.label(labels) },
        ],
    }
}
