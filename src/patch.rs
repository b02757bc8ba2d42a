//! DOM patches: the output of every click decision.
//!
//! The decision modules never touch the browser. They return an [`Update`]
//! listing the mutations to perform, and the binding in [`crate::dom`]
//! applies them in order.

#[cfg(test)]
#[path = "patch_test.rs"]
mod patch_test;

/// Logical element a patch is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    EyeControl,
    Body,
    SidebarToggle,
}

/// A single DOM mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<'a> {
    /// Set the password input's `type` attribute.
    SetInputType { value: &'a str },
    /// Replace an element's text content.
    SetText { target: Target, text: &'a str },
    AddClass { target: Target, class: &'a str },
    RemoveClass { target: Target, class: &'a str },
    /// Cancel the triggering event's default action.
    PreventDefault,
}

/// Next state plus the patches that bring the DOM in line with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<'a, S> {
    pub next: S,
    pub patches: Vec<Patch<'a>>,
}

impl<S> Update<'_, S> {
    /// An update that changes nothing.
    #[must_use]
    pub fn unchanged(current: S) -> Self {
        Self { next: current, patches: Vec::new() }
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.patches.is_empty()
    }
}
