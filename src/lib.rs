//! Browser behaviors for the portal's server-rendered pages.
//!
//! This crate is compiled to WebAssembly. The host page calls [`initialize`]
//! once its content has loaded; the behaviors then stay active until the
//! page unloads or the host calls [`dispose`]. Two independent controllers
//! are installed: the password eye toggle on the login form and the sidebar
//! toggle with outside-click dismissal.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`password`] | Password mode and the eye-click decision |
//! | [`sidebar`] | Sidebar state and the toggle/outside-click decisions |
//! | [`patch`] | DOM patches returned by every decision |
//! | [`dom`] | web-sys binding: element lookup, listeners, patch application |
//! | [`registry`] | Page-lifetime slot holding the installed controllers |
//! | [`config`] | Host-overridable ids, selectors, classes, labels |
//! | [`error`] | [`error::UiError`] |
//! | [`consts`] | Default DOM contract |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod password;
pub mod patch;
pub mod registry;
pub mod sidebar;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::UiConfig;

/// Install both behaviors with the default DOM contract.
///
/// A behavior whose elements are missing stays inactive. Browser errors
/// while attaching are logged and leave that behavior inactive. Calling it
/// again replaces the previous installation.
#[wasm_bindgen]
pub fn initialize(document: &Document) {
    install(document, UiConfig::default());
}

/// Install both behaviors with a JSON configuration object.
///
/// # Errors
///
/// Throws a JS `Error` if the configuration fails to parse or validate.
#[wasm_bindgen(js_name = initializeWithConfig)]
pub fn initialize_with_config(document: &Document, config_json: &str) -> Result<(), JsValue> {
    let config = UiConfig::from_json(config_json)?;
    install(document, config);
    Ok(())
}

/// Detach every listener. Returns whether anything was installed.
#[wasm_bindgen]
pub fn dispose() -> bool {
    registry::dispose()
}

/// Whether the password input and eye control were found.
#[wasm_bindgen(js_name = passwordToggleActive)]
pub fn password_toggle_active() -> bool {
    registry::password_active()
}

/// Whether the sidebar listeners were attached.
#[wasm_bindgen(js_name = sidebarToggleActive)]
pub fn sidebar_toggle_active() -> bool {
    registry::sidebar_active()
}

fn install(document: &Document, config: UiConfig) {
    init_logging(&config);
    registry::install(document, config);
}

/// Route `log` to the browser console and panics to `console.error`.
fn init_logging(config: &UiConfig) {
    console_error_panic_hook::set_once();
    let level = config.level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        // Logger is process-global; a second initialize keeps the first.
        log::debug!("console logger already installed");
    }
}
