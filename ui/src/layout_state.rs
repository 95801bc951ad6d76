//! Defines the reactive layout state shared through a Dioxus context.

use dioxus::prelude::*;

use crate::prefs::LayoutPrefs;
use crate::prefs::ViewMode;

/// A reactive state provided as a Dioxus context for layout decisions.
///
/// `is_mobile` is the live breakpoint reading; `view_mode` is the user's
/// override on top of it.
#[derive(Clone, Copy)]
pub struct LayoutState {
    /// `true` while the viewport is narrower than the mobile breakpoint.
    pub is_mobile: Memo<bool>,
    /// The layout override, seeded from `LayoutPrefs`.
    pub view_mode: Signal<ViewMode>,
}

impl LayoutState {
    /// Whether the mobile layout should be rendered right now.
    pub fn mobile_layout(&self) -> bool {
        LayoutPrefs::new((self.view_mode)()).resolve((self.is_mobile)())
    }
}
