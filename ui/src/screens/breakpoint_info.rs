// File: src/screens/breakpoint_info.rs

use breakpoint::Breakpoint;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::pico::OutlineButton;
use crate::layout_state::LayoutState;

/// Shows the breakpoint details and lets the user cycle the view mode.
#[component]
pub fn BreakpointScreen() -> Element {
    let mut layout = use_context::<LayoutState>();
    let breakpoint = Breakpoint::default();
    let threshold = breakpoint.threshold();
    let query = breakpoint.query();
    let below = (layout.is_mobile)();
    let view_mode = (layout.view_mode)();

    rsx! {
        Card {
            h3 { "Breakpoint" }
            table {
                tbody {
                    tr {
                        th { "Threshold" }
                        td { "{threshold}px" }
                    }
                    tr {
                        th { "Media query" }
                        td { code { "{query}" } }
                    }
                    tr {
                        th { "Viewport below threshold" }
                        td { "{below}" }
                    }
                    tr {
                        th { "View mode" }
                        td { "{view_mode}" }
                    }
                }
            }
            OutlineButton {
                on_click: move |_| {
                    let next = (layout.view_mode)().next();
                    dioxus_logger::tracing::info!("view mode -> {}", next);
                    layout.view_mode.set(next);
                },
                "Switch view mode"
            }
        }
    }
}
