//! Tracks whether the viewport is narrower than the mobile breakpoint.
//!
//! The crate is platform-agnostic: a [`Viewport`] supplies the width and
//! the media-query change notifications, a [`BreakpointObserver`] turns
//! them into a live [`MobileSignal`]. The Dioxus hook in the `ui` crate
//! plugs a browser or desktop viewport into it.

pub mod error;
pub mod manual;
pub mod observer;
pub mod signal;
pub mod threshold;
pub mod viewport;

pub use error::ViewportError;
pub use manual::ManualViewport;
pub use observer::BreakpointObserver;
pub use signal::MobileSignal;
pub use signal::SignalSubscription;
pub use threshold::Breakpoint;
pub use threshold::WidthQuery;
pub use threshold::MOBILE_BREAKPOINT;
pub use viewport::Viewport;
