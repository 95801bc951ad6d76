// File: src/screens/about.rs

use dioxus::prelude::*;

use crate::components::pico::Card;

#[component]
pub fn AboutScreen() -> Element {
    rsx! {
        Card {
            h3 { "About" }
            p {
                "This demo switches between a desktop and a mobile layout using a single "
                "width breakpoint. Resize the window across 768px to see it update."
            }
            p {
                "Set "
                code { "VIEW_MODE" }
                " to "
                code { "mobile" }
                " or "
                code { "desktop" }
                " to pin a layout on native builds."
            }
        }
    }
}
