//! Host-supplied configuration for the DOM contract.
//!
//! Every field defaults to the portal's markup, so `{}` and
//! [`UiConfig::default`] are equivalent. Hosts with different ids or a
//! different language override only what differs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::UiError;

/// Labels written to the eye control after each click.
///
/// Each label names the action the *next* click will perform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EyeLabels {
    /// Shown while the field is masked.
    pub show: String,
    /// Shown while the field is revealed.
    pub hide: String,
}

impl Default for EyeLabels {
    fn default() -> Self {
        Self { show: consts::SHOW_LABEL.to_owned(), hide: consts::HIDE_LABEL.to_owned() }
    }
}

/// Classes the sidebar controller toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarClasses {
    /// Marker class on `<body>`.
    pub visible: String,
    /// Active-visual class on the toggle control.
    pub active: String,
}

impl Default for SidebarClasses {
    fn default() -> Self {
        Self {
            visible: consts::SIDEBAR_VISIBLE_CLASS.to_owned(),
            active: consts::TOGGLE_ACTIVE_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub password_input_id: String,
    pub eye_control_id: String,
    pub eye_labels: EyeLabels,
    pub sidebar_selector: String,
    pub sidebar_toggle_id: String,
    pub sidebar_classes: SidebarClasses,
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            password_input_id: consts::PASSWORD_INPUT_ID.to_owned(),
            eye_control_id: consts::EYE_CONTROL_ID.to_owned(),
            eye_labels: EyeLabels::default(),
            sidebar_selector: consts::SIDEBAR_SELECTOR.to_owned(),
            sidebar_toggle_id: consts::SIDEBAR_TOGGLE_ID.to_owned(),
            sidebar_classes: SidebarClasses::default(),
            log_level: consts::DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed JSON, `InvalidConfig` for empty
    /// fields, and `InvalidLogLevel` for an unknown level name.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty ids, selectors, classes, labels, and unknown log levels.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), UiError> {
        let fields = [
            ("password_input_id", &self.password_input_id),
            ("eye_control_id", &self.eye_control_id),
            ("eye_labels.show", &self.eye_labels.show),
            ("eye_labels.hide", &self.eye_labels.hide),
            ("sidebar_selector", &self.sidebar_selector),
            ("sidebar_toggle_id", &self.sidebar_toggle_id),
            ("sidebar_classes.visible", &self.sidebar_classes.visible),
            ("sidebar_classes.active", &self.sidebar_classes.active),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(UiError::InvalidConfig { field });
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLogLevel` if the name is not a `log` level.
    pub fn level(&self) -> Result<log::Level, UiError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| UiError::InvalidLogLevel(self.log_level.clone()))
    }
}
