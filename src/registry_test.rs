use wasm_bindgen_test::wasm_bindgen_test;

use super::*;
use crate::dom::dom_test::{Fixture, LOGIN_FORM, SIDEBAR_LAYOUT};

fn login_and_sidebar() -> Fixture {
    Fixture::new(&format!("{LOGIN_FORM}{SIDEBAR_LAYOUT}"))
}

// =============================================================
// Lifetime
// =============================================================

#[wasm_bindgen_test]
fn controllers_outlive_the_initialize_call() {
    let page = login_and_sidebar();
    crate::initialize(&page.document);

    assert!(password_active());
    assert!(sidebar_active());

    page.by_id("toggleEye").click();
    assert_eq!(page.input("id_password").type_(), "text");
    page.by_id("sidebarToggle").click();
    assert!(page.sidebar_open());

    assert!(dispose());
}

#[wasm_bindgen_test]
fn missing_elements_leave_password_inactive() {
    let page = Fixture::new(SIDEBAR_LAYOUT);
    crate::initialize(&page.document);

    assert!(!password_active());
    assert!(sidebar_active());
    assert!(dispose());
}

#[wasm_bindgen_test]
fn dispose_detaches_every_listener() {
    let page = login_and_sidebar();
    crate::initialize(&page.document);
    assert!(dispose());

    assert!(!password_active());
    assert!(!sidebar_active());

    page.by_id("toggleEye").click();
    assert_eq!(page.input("id_password").type_(), "password");
    page.by_id("sidebarToggle").click();
    assert!(!page.sidebar_open());
}

#[wasm_bindgen_test]
fn dispose_without_install_reports_nothing() {
    dispose();
    assert!(!dispose());
}

// =============================================================
// Re-initialize
// =============================================================

#[wasm_bindgen_test]
fn second_initialize_replaces_listeners() {
    let page = login_and_sidebar();
    crate::initialize(&page.document);
    crate::initialize(&page.document);

    page.by_id("sidebarToggle").click();
    assert!(page.sidebar_open());
    assert!(page.toggle_active());

    page.by_id("toggleEye").click();
    assert_eq!(page.input("id_password").type_(), "text");

    assert!(dispose());
}

#[wasm_bindgen_test]
fn invalid_config_keeps_previous_installation() {
    let page = login_and_sidebar();
    crate::initialize(&page.document);

    let result = crate::initialize_with_config(&page.document, r#"{ "eye_control_id": "" }"#);
    assert!(result.is_err());
    assert!(password_active());

    assert!(dispose());
}

#[wasm_bindgen_test]
fn config_overrides_reach_the_listeners() {
    let page = login_and_sidebar();
    crate::initialize_with_config(&page.document, r#"{ "eye_labels": { "hide": "Hide" } }"#)
        .expect("valid config");

    page.by_id("toggleEye").click();
    assert_eq!(page.by_id("toggleEye").text_content().as_deref(), Some("Hide"));

    assert!(dispose());
}
