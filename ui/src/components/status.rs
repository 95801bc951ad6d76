use breakpoint::Breakpoint;
use dioxus::prelude::*;

use crate::layout_state::LayoutState;

/// One-line summary of the live breakpoint reading and the active override.
#[component]
pub fn LayoutStatus() -> Element {
    let layout = use_context::<LayoutState>();
    let breakpoint = Breakpoint::default();
    let threshold = breakpoint.threshold();
    let query = breakpoint.query();
    let view_mode = (layout.view_mode)();

    let reading = if (layout.is_mobile)() {
        "narrower than"
    } else {
        "at least"
    };
    let rendered = if layout.mobile_layout() {
        "mobile"
    } else {
        "desktop"
    };

    rsx! {
        p {
            small {
                "Viewport is {reading} {threshold}px "
                code { "{query}" }
                " · mode: {view_mode} · rendering {rendered} layout"
            }
        }
    }
}
