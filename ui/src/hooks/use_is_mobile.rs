//=============================================================================
// File: src/hooks/use_is_mobile.rs
//=============================================================================

// Pick the viewport backend for the target platform. Every variant exposes
// the same `use_is_mobile() -> Memo<bool>`.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(all(not(target_arch = "wasm32"), feature = "dioxus-desktop"))]
pub use self::desktop::*;

// No browser and no desktop window (server rendering, plain native builds):
// nothing to measure, so the layout stays desktop.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
pub use self::fallback::*;

/// # WebAssembly (WASM) Implementation
/// Reads `window.innerWidth` and listens to `window.matchMedia(...)` through
/// `web_sys`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::rc::Rc;

    use breakpoint::Viewport;
    use breakpoint::ViewportError;
    use breakpoint::WidthQuery;
    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::MediaQueryList;

    /// The browser window.
    pub struct WebViewport;

    impl Viewport for WebViewport {
        type Subscription = MediaQueryListener;

        fn inner_width(&self) -> Result<f64, ViewportError> {
            let window = web_sys::window().ok_or(ViewportError::Unavailable)?;
            let width = window
                .inner_width()
                .map_err(|e| ViewportError::InvalidWidth(format!("{:?}", e)))?;
            width
                .as_f64()
                .ok_or_else(|| ViewportError::InvalidWidth(format!("{:?}", width)))
        }

        fn watch(
            &self,
            query: &WidthQuery,
            on_change: Rc<dyn Fn()>,
        ) -> Result<MediaQueryListener, ViewportError> {
            let media = query.to_string();
            let window = web_sys::window().ok_or(ViewportError::Unavailable)?;
            let list = window
                .match_media(&media)
                .map_err(|e| media_query_error(&media, &e))?
                .ok_or_else(|| ViewportError::MediaQuery {
                    query: media.clone(),
                    reason: "matchMedia returned null".to_string(),
                })?;

            let callback = Closure::<dyn FnMut()>::new(move || on_change());
            list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .map_err(|e| media_query_error(&media, &e))?;

            Ok(MediaQueryListener { list, callback })
        }
    }

    fn media_query_error(query: &str, e: &JsValue) -> ViewportError {
        ViewportError::MediaQuery {
            query: query.to_string(),
            reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
        }
    }

    /// A `change` listener on a `MediaQueryList`, removed on drop.
    pub struct MediaQueryListener {
        list: MediaQueryList,
        callback: Closure<dyn FnMut()>,
    }

    impl Drop for MediaQueryListener {
        fn drop(&mut self) {
            if let Err(e) = self
                .list
                .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
            {
                dioxus_logger::tracing::warn!("could not remove media query listener: {:?}", e);
            }
        }
    }

    pub fn use_is_mobile() -> Memo<bool> {
        super::super::use_breakpoint_observer(|| WebViewport)
    }
}

/// # Desktop Implementation
/// The webview fills the tao window, so the window's logical inner width is
/// the viewport width. Resize events from the event loop are pushed into a
/// `ManualViewport`, which only notifies on threshold crossings like a real
/// media query would.
#[cfg(all(not(target_arch = "wasm32"), feature = "dioxus-desktop"))]
mod desktop {
    use breakpoint::ManualViewport;
    use dioxus::prelude::*;
    use dioxus_desktop::tao::event::Event;
    use dioxus_desktop::tao::event::WindowEvent;
    use dioxus_desktop::use_window;
    use dioxus_desktop::use_wry_event_handler;
    use dioxus_desktop::DesktopContext;

    /// Whole logical pixels, floored like `window.innerWidth`.
    fn logical_width(window: &DesktopContext) -> f64 {
        let scale = window.window.scale_factor();
        window.window.inner_size().to_logical::<f64>(scale).width.floor()
    }

    pub fn use_is_mobile() -> Memo<bool> {
        let window = use_window();
        let viewport = use_hook(|| ManualViewport::new(Some(logical_width(&window))));

        let resized = viewport.clone();
        use_wry_event_handler(move |event, _| {
            if let Event::WindowEvent {
                window_id,
                event: WindowEvent::Resized(_),
                ..
            } = event
            {
                if *window_id == window.window.id() {
                    resized.resize(logical_width(&window));
                }
            }
        });

        super::super::use_breakpoint_observer(move || viewport)
    }
}

/// # Fallback Implementation
#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
mod fallback {
    use breakpoint::ManualViewport;
    use dioxus::prelude::*;

    pub fn use_is_mobile() -> Memo<bool> {
        super::super::use_breakpoint_observer(|| ManualViewport::new(None))
    }
}
