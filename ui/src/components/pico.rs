//! Small Dioxus wrappers around Pico.css markup.
//! Assumes the Pico stylesheet is linked by the app shell.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container. Wraps content in `<main class="container">`.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content. Wraps content in `<article>`.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// An outlined secondary button, the only style the app shell uses.
#[component]
pub fn OutlineButton(on_click: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "secondary outline",
            onclick: move |evt| on_click.call(evt),
            {children}
        }
    }
}
