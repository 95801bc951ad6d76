use std::rc::Rc;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

use crate::signal::MobileSignal;
use crate::threshold::Breakpoint;
use crate::viewport::Viewport;

/// Keeps a [`MobileSignal`] in sync with a [`Viewport`].
///
/// The observer has two phases. [`create`](Self::create) measures once so the
/// signal is usable straight away. [`activate`](Self::activate) registers the
/// media-query listener that keeps it live, and
/// [`deactivate`](Self::deactivate) (or dropping the observer) releases it.
/// None of these operations can fail; platform errors are logged and the
/// signal keeps its last value.
pub struct BreakpointObserver<V: Viewport> {
    viewport: Rc<V>,
    breakpoint: Breakpoint,
    signal: MobileSignal,
    subscription: Option<V::Subscription>,
}

impl<V: Viewport + 'static> BreakpointObserver<V> {
    pub fn create(viewport: V, breakpoint: Breakpoint) -> Self {
        let observer = Self {
            viewport: Rc::new(viewport),
            breakpoint,
            signal: MobileSignal::new(),
            subscription: None,
        };
        measure(&*observer.viewport, breakpoint, &observer.signal);
        observer
    }

    /// Starts listening for threshold crossings. No-op while already active.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        measure(&*self.viewport, self.breakpoint, &self.signal);

        let query = self.breakpoint.query();
        let on_change: Rc<dyn Fn()> = {
            let viewport = Rc::downgrade(&self.viewport);
            let breakpoint = self.breakpoint;
            let signal = self.signal.clone();
            Rc::new(move || {
                if let Some(viewport) = viewport.upgrade() {
                    measure(&*viewport, breakpoint, &signal);
                }
            })
        };

        match self.viewport.watch(&query, on_change) {
            Ok(subscription) => {
                debug!("watching {}", query);
                self.subscription = Some(subscription);
            }
            Err(e) => warn!("breakpoint updates disabled: {}", e),
        }
    }
}

impl<V: Viewport> BreakpointObserver<V> {
    /// Releases the listener. Safe to call any number of times, including
    /// before [`activate`](Self::activate).
    pub fn deactivate(&mut self) {
        if self.subscription.take().is_some() {
            debug!("stopped watching {}", self.breakpoint.query());
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn is_mobile(&self) -> bool {
        self.signal.get()
    }

    pub fn signal(&self) -> &MobileSignal {
        &self.signal
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}

impl<V: Viewport> Drop for BreakpointObserver<V> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// One synchronous measurement. An unreadable width leaves the cell alone,
/// so an observer that never measured keeps reading `false`.
fn measure<V: Viewport + ?Sized>(viewport: &V, breakpoint: Breakpoint, signal: &MobileSignal) {
    match viewport.inner_width() {
        Ok(width) => signal.set(breakpoint.is_below(width)),
        Err(e) => debug!("viewport width unavailable: {}", e),
    }
}
