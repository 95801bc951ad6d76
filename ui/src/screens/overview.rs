// File: src/screens/overview.rs

use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::layout_state::LayoutState;

/// Landing screen. Renders different content for the two layouts so the
/// switch is visible without resizing by hand.
#[component]
pub fn OverviewScreen() -> Element {
    let layout = use_context::<LayoutState>();

    rsx! {
        Card {
            h3 { "Overview" }
            if layout.mobile_layout() {
                p { "Compact layout: navigation lives in the menu button above." }
                ul {
                    li { "Single column" }
                    li { "Menu instead of tabs" }
                }
            } else {
                p { "Wide layout: navigation is shown as tabs." }
                div {
                    class: "grid",
                    div { "Left column" }
                    div { "Right column" }
                }
            }
        }
    }
}
