//! Sidebar visibility: the toggle control and outside-click dismissal.
//!
//! The `<body>` marker class is the source of truth for whether the sidebar
//! is open. The toggle control's active class mirrors it.
//!
//! Both handlers see the same physical click on the toggle control: the
//! toggle handler runs first, then the document handler as the event
//! bubbles. The document handler must ignore clicks on the toggle, or it
//! would immediately close what the toggle just opened.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::config::SidebarClasses;
use crate::patch::{Patch, Target, Update};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

impl SidebarState {
    /// Read the state from whether `<body>` carries the marker class.
    #[must_use]
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Where a document click landed, relative to the protected elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    /// Target is the sidebar or one of its descendants.
    pub inside_sidebar: bool,
    /// Target is the toggle control or one of its descendants.
    pub on_toggle: bool,
}

impl ClickTarget {
    /// A click outside both protected elements.
    #[must_use]
    pub fn outside() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_outside(self) -> bool {
        !self.inside_sidebar && !self.on_toggle
    }
}

/// Handle a click on the toggle control.
///
/// Both classes are written explicitly for the next state, so a body and
/// toggle that drifted apart are brought back into lockstep.
#[must_use]
pub fn on_toggle_click(current: SidebarState, classes: &SidebarClasses) -> Update<'_, SidebarState> {
    let next = current.toggled();
    let mut patches = vec![Patch::PreventDefault];
    patches.extend(set_visible(next, classes));
    Update { next, patches }
}

/// Handle a click anywhere in the document.
///
/// Closes the sidebar only when it exists, is open, and the click landed
/// outside both the sidebar and the toggle control.
#[must_use]
pub fn on_document_click(
    current: SidebarState,
    sidebar_present: bool,
    target: ClickTarget,
    classes: &SidebarClasses,
) -> Update<'_, SidebarState> {
    if !sidebar_present || !target.is_outside() || !current.is_open() {
        return Update::unchanged(current);
    }
    let next = SidebarState::Closed;
    Update { next, patches: set_visible(next, classes).to_vec() }
}

fn set_visible(state: SidebarState, classes: &SidebarClasses) -> [Patch<'_>; 2] {
    match state {
        SidebarState::Open => [
            Patch::AddClass { target: Target::Body, class: &classes.visible },
            Patch::AddClass { target: Target::SidebarToggle, class: &classes.active },
        ],
        SidebarState::Closed => [
            Patch::RemoveClass { target: Target::Body, class: &classes.visible },
            Patch::RemoveClass { target: Target::SidebarToggle, class: &classes.active },
        ],
    }
}
