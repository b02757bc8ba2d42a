//! Page-lifetime ownership of the installed behaviors.
//!
//! The controllers live in a thread-local slot rather than in a JS-owned
//! handle, so dropping the return value of `initialize` on the JS side never
//! detaches listeners. Only [`dispose`] or a re-initialize removes them.

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "registry_test.rs"]
mod registry_test;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::config::UiConfig;
use crate::dom::{PasswordToggle, SidebarToggle};
use crate::error::UiError;

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

/// Controllers attached by one `initialize` call.
struct Installed {
    password: Option<PasswordToggle>,
    sidebar: Option<SidebarToggle>,
}

impl Installed {
    fn attach(document: &Document, config: UiConfig) -> Self {
        let config = Rc::new(config);
        Self {
            password: inactive_on_error(PasswordToggle::install(document, &config)),
            sidebar: inactive_on_error(SidebarToggle::install(document, &config)),
        }
    }
}

fn inactive_on_error<T>(result: Result<Option<T>, UiError>) -> Option<T> {
    result.unwrap_or_else(|err| {
        log::warn!("{err}");
        None
    })
}

/// Install both behaviors, replacing any previous installation.
///
/// The previous listeners are detached before the new ones attach, so a
/// second call never leaves two toggle listeners on the same control.
pub fn install(document: &Document, config: UiConfig) {
    if dispose() {
        log::warn!("portal ui already initialized; replacing previous listeners");
    }
    let installed = Installed::attach(document, config);
    INSTALLED.with_borrow_mut(|slot| *slot = Some(installed));
}

/// Detach every listener. Returns whether anything was installed.
pub fn dispose() -> bool {
    // Take first so listener drops run without the slot borrowed.
    let previous = INSTALLED.with_borrow_mut(Option::take);
    previous.is_some()
}

/// Whether the password input and eye control were found.
#[must_use]
pub fn password_active() -> bool {
    INSTALLED.with_borrow(|slot| slot.as_ref().is_some_and(|installed| installed.password.is_some()))
}

/// Whether the sidebar listeners were attached.
#[must_use]
pub fn sidebar_active() -> bool {
    INSTALLED.with_borrow(|slot| slot.as_ref().is_some_and(|installed| installed.sidebar.is_some()))
}
