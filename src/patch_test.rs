use super::*;

#[test]
fn unchanged_keeps_state_and_has_no_patches() {
    let update: Update<'_, u8> = Update::unchanged(3);
    assert_eq!(update.next, 3);
    assert!(update.is_noop());
}

#[test]
fn update_with_patches_is_not_noop() {
    let update = Update { next: (), patches: vec![Patch::PreventDefault] };
    assert!(!update.is_noop());
}

#[test]
fn patches_compare_by_target_and_value() {
    let a = Patch::AddClass { target: Target::Body, class: "show-sidebar" };
    let b = Patch::AddClass { target: Target::SidebarToggle, class: "show-sidebar" };
    assert_ne!(a, b);
    assert_eq!(a, Patch::AddClass { target: Target::Body, class: "show-sidebar" });
}
