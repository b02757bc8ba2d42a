//! Default DOM contract for the portal pages.

// ── Login form ──────────────────────────────────────────────────

/// Id of the password `<input>` rendered by the login form.
pub const PASSWORD_INPUT_ID: &str = "id_password";

/// Id of the eye control next to the password field.
pub const EYE_CONTROL_ID: &str = "toggleEye";

/// Eye label while the field is masked: the next click shows it.
pub const SHOW_LABEL: &str = "Mostrar";

/// Eye label while the field is revealed: the next click hides it.
pub const HIDE_LABEL: &str = "Ocultar";

/// Input `type` value for a masked field.
pub const INPUT_TYPE_MASKED: &str = "password";

/// Input `type` value for a revealed field.
pub const INPUT_TYPE_REVEALED: &str = "text";

// ── Sidebar ─────────────────────────────────────────────────────

/// Selector for the sidebar panel. First match wins.
pub const SIDEBAR_SELECTOR: &str = ".sidebar";

/// Id of the control that opens and closes the sidebar.
pub const SIDEBAR_TOGGLE_ID: &str = "sidebarToggle";

/// Marker class on `<body>` while the sidebar is shown.
pub const SIDEBAR_VISIBLE_CLASS: &str = "show-sidebar";

/// Active-visual class on the toggle control while the sidebar is shown.
pub const TOGGLE_ACTIVE_CLASS: &str = "active";

// ── Logging ─────────────────────────────────────────────────────

/// Console log level used when the host does not configure one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
