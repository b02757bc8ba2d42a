//! Browser binding: resolves elements, owns listeners, applies patches.
//!
//! ARCHITECTURE
//! ============
//! Each controller reads its current state out of the DOM on every click,
//! asks the pure decision module what to do, and applies the returned
//! patches. Listeners are owned by [`Listener`] handles and detached on drop.
//! Missing elements leave the feature inactive; nothing here is fatal.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Node};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::password::{self, PasswordMode};
use crate::patch::{Patch, Target};
use crate::sidebar::{self, ClickTarget, SidebarState};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "dom_test.rs"]
pub(crate) mod dom_test;

const CLICK: &str = "click";

// =============================================================================
// LISTENER
// =============================================================================

/// An attached event listener. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target` for `event`.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the browser rejects the registration.
    pub fn attach(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| UiError::dom("addEventListener", &err))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("{}", UiError::dom("removeEventListener", &err));
        }
    }
}

// =============================================================================
// PATCHES
// =============================================================================

/// Concrete elements behind each [`Target`]. Absent targets are skipped.
#[derive(Default, Clone)]
struct Elements {
    password_input: Option<HtmlInputElement>,
    eye_control: Option<Element>,
    body: Option<HtmlElement>,
    sidebar_toggle: Option<Element>,
}

impl Elements {
    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::EyeControl => self.eye_control.as_ref(),
            Target::Body => self.body.as_ref().map(AsRef::as_ref),
            Target::SidebarToggle => self.sidebar_toggle.as_ref(),
        }
    }
}

fn apply(elements: &Elements, patches: &[Patch<'_>], event: &Event) -> Result<(), UiError> {
    for patch in patches {
        match *patch {
            Patch::SetInputType { value } => {
                if let Some(input) = &elements.password_input {
                    input.set_type(value);
                }
            }
            Patch::SetText { target, text } => {
                if let Some(el) = elements.element(target) {
                    el.set_text_content(Some(text));
                }
            }
            Patch::AddClass { target, class } => {
                if let Some(el) = elements.element(target) {
                    el.class_list()
                        .add_1(class)
                        .map_err(|err| UiError::dom("classList.add", &err))?;
                }
            }
            Patch::RemoveClass { target, class } => {
                if let Some(el) = elements.element(target) {
                    el.class_list()
                        .remove_1(class)
                        .map_err(|err| UiError::dom("classList.remove", &err))?;
                }
            }
            Patch::PreventDefault => event.prevent_default(),
        }
    }
    Ok(())
}

fn apply_or_warn(elements: &Elements, patches: &[Patch<'_>], event: &Event) {
    if let Err(err) = apply(elements, patches, event) {
        log::warn!("{err}");
    }
}

// =============================================================================
// PASSWORD TOGGLE
// =============================================================================

/// Eye-control binding for the login form.
pub struct PasswordToggle {
    _click: Listener,
}

impl PasswordToggle {
    /// Bind to the password input and eye control.
    ///
    /// Returns `Ok(None)` when either element is missing.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the click listener cannot be attached.
    pub fn install(document: &Document, config: &Rc<UiConfig>) -> Result<Option<Self>, UiError> {
        let input = document
            .get_element_by_id(&config.password_input_id)
            .and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned());
        let eye = document.get_element_by_id(&config.eye_control_id);
        let (Some(input), Some(eye)) = (input, eye) else {
            log::debug!(
                "password toggle inactive: #{} or #{} not found",
                config.password_input_id,
                config.eye_control_id
            );
            return Ok(None);
        };

        let elements = Elements { password_input: Some(input.clone()), eye_control: Some(eye.clone()), ..Elements::default() };
        let config = Rc::clone(config);
        let click = Listener::attach(&eye, CLICK, move |event: Event| {
            let current = PasswordMode::from_input_type(&input.type_());
            let update = password::on_eye_click(current, &config.eye_labels);
            log::trace!("password mode {current:?} -> {:?}", update.next);
            apply_or_warn(&elements, &update.patches, &event);
        })?;

        log::debug!("password toggle installed");
        Ok(Some(Self { _click: click }))
    }
}

// =============================================================================
// SIDEBAR TOGGLE
// =============================================================================

/// Toggle-control and outside-click bindings for the sidebar.
pub struct SidebarToggle {
    _toggle_click: Option<Listener>,
    _document_click: Listener,
}

impl SidebarToggle {
    /// Bind the toggle control (if present) and the document-wide click.
    ///
    /// Returns `Ok(None)` when the document has no `<body>`.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the sidebar selector is rejected or a listener
    /// cannot be attached.
    pub fn install(document: &Document, config: &Rc<UiConfig>) -> Result<Option<Self>, UiError> {
        let Some(body) = document.body() else {
            log::debug!("sidebar toggle inactive: document has no body");
            return Ok(None);
        };
        let sidebar = document
            .query_selector(&config.sidebar_selector)
            .map_err(|err| UiError::dom("querySelector", &err))?;
        let toggle = document.get_element_by_id(&config.sidebar_toggle_id);

        let elements = Elements { body: Some(body), sidebar_toggle: toggle.clone(), ..Elements::default() };

        let toggle_click = match &toggle {
            Some(control) => {
                let elements = elements.clone();
                let config = Rc::clone(config);
                Some(Listener::attach(control, CLICK, move |event: Event| {
                    let current = current_state(&elements, &config);
                    let update = sidebar::on_toggle_click(current, &config.sidebar_classes);
                    log::trace!("sidebar {current:?} -> {:?} (toggle)", update.next);
                    apply_or_warn(&elements, &update.patches, &event);
                })?)
            }
            None => {
                log::debug!("sidebar toggle control #{} not found", config.sidebar_toggle_id);
                None
            }
        };

        let config = Rc::clone(config);
        let document_click = Listener::attach(document, CLICK, move |event: Event| {
            let target = classify(&event, sidebar.as_ref(), toggle.as_ref());
            let current = current_state(&elements, &config);
            let update = sidebar::on_document_click(current, sidebar.is_some(), target, &config.sidebar_classes);
            if !update.is_noop() {
                log::trace!("sidebar {current:?} -> {:?} (outside click)", update.next);
            }
            apply_or_warn(&elements, &update.patches, &event);
        })?;

        log::debug!("sidebar toggle installed");
        Ok(Some(Self { _toggle_click: toggle_click, _document_click: document_click }))
    }
}

fn current_state(elements: &Elements, config: &UiConfig) -> SidebarState {
    let open = elements
        .body
        .as_ref()
        .is_some_and(|body| body.class_list().contains(&config.sidebar_classes.visible));
    SidebarState::from_marker(open)
}

/// Locate the event target relative to the sidebar and the toggle control.
fn classify(event: &Event, sidebar: Option<&Element>, toggle: Option<&Element>) -> ClickTarget {
    let Some(node) = event.target().and_then(|target| target.dyn_ref::<Node>().cloned()) else {
        return ClickTarget::outside();
    };
    let contains = |el: Option<&Element>| el.is_some_and(|el| el.contains(Some(&node)));
    ClickTarget { inside_sidebar: contains(sidebar), on_toggle: contains(toggle) }
}
