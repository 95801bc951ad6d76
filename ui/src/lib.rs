// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod hooks;
mod layout_state;
pub mod prefs;
mod screens;

use components::pico::Container;
use components::pico::OutlineButton;
use components::status::LayoutStatus;
use hooks::use_is_mobile::use_is_mobile;
use layout_state::LayoutState;
use prefs::LayoutPrefs;
use screens::about::AboutScreen;
use screens::breakpoint_info::BreakpointScreen;
use screens::overview::OverviewScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default)]
enum Screen {
    #[default]
    Overview,
    Breakpoint,
    About,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Breakpoint => "Breakpoint",
            Screen::About => "About",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 3] = [Screen::Overview, Screen::Breakpoint, Screen::About];

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: {
                                if active_screen() == screen { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if active_screen() == screen { "page" } else { "false" }
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            OutlineButton {
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in ALL_SCREENS {
                        a {
                            class: {
                                if active_screen() == screen {
                                    "custom-dropdown-item active-tab"
                                } else {
                                    "custom-dropdown-item"
                                }
                            },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                                is_open.set(false);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActiveScreen(screen: Screen) -> Element {
    match screen {
        Screen::Overview => rsx! { OverviewScreen {} },
        Screen::Breakpoint => rsx! { BreakpointScreen {} },
        Screen::About => rsx! { AboutScreen {} },
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        text-decoration: none;
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- Mobile menu --- */
    .hamburger-menu-container { position: relative; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 10; }
    .custom-dropdown-menu { position: absolute; right: 0; z-index: 11; min-width: 12rem; padding: 0.5rem 0; }
    .custom-dropdown-item { display: block; padding: 0.5rem 1rem; }
    .custom-dropdown-item.active-tab {
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(1rem - 4px);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let is_mobile = use_is_mobile();
    let view_mode = use_signal(|| LayoutPrefs::default().view_mode());
    let layout = use_context_provider(|| LayoutState {
        is_mobile,
        view_mode,
    });

    use_effect(move || {
        dioxus_logger::tracing::info!(
            "viewport {} the breakpoint",
            if is_mobile() { "below" } else { "at or above" }
        );
    });

    let active_screen = use_signal(Screen::default);

    if layout.mobile_layout() {
        rsx! {
            Container {
                header {
                    nav {
                        ul {
                            li { strong { "{active_screen().name()}" } }
                        }
                        ul {
                            li {
                                HamburgerMenu { active_screen }
                            }
                        }
                    }
                }
                LayoutStatus {}
                ActiveScreen { screen: active_screen() }
            }
        }
    } else {
        rsx! {
            Container {
                header {
                    Tabs { active_screen }
                }
                LayoutStatus {}
                ActiveScreen { screen: active_screen() }
            }
        }
    }
}
