//! An in-memory viewport with browser media-query semantics.
//!
//! The owner pushes widths in with [`ManualViewport::resize`]. The desktop
//! backend feeds it window resize events; tests and headless targets drive
//! it by hand.

use std::cell::RefCell;
use std::rc::Rc;
use std::rc::Weak;

use crate::error::ViewportError;
use crate::threshold::WidthQuery;
use crate::viewport::Viewport;

struct Watch {
    id: u64,
    query: WidthQuery,
    matched: bool,
    on_change: Rc<dyn Fn()>,
}

#[derive(Default)]
struct State {
    width: Option<f64>,
    next_id: u64,
    watches: Vec<Watch>,
}

impl State {
    fn matches(&self, query: &WidthQuery) -> bool {
        self.width.is_some_and(|w| query.matches(w))
    }
}

/// A viewport whose width is set by its owner.
///
/// Widths are floored to whole pixels, like `window.innerWidth`. Flooring
/// keeps `width < threshold` and `width <= threshold - 1` in agreement, so a
/// fractional width can never read mobile without the query matching.
///
/// Clones share the same surface, so a test can keep one handle to
/// [`resize`](Self::resize) while an observer owns another.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<RefCell<State>>,
}

impl ManualViewport {
    /// `None` models a runtime with no display surface.
    pub fn new(width: Option<f64>) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                width: width.map(f64::floor),
                ..State::default()
            })),
        }
    }

    /// Changes the width and notifies every watch whose query flipped.
    pub fn resize(&self, width: f64) {
        self.set_width(Some(width));
    }

    /// Removes the display surface; later width reads fail.
    pub fn detach(&self) {
        self.set_width(None);
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().watches.len()
    }

    fn set_width(&self, width: Option<f64>) {
        // Collect first: callbacks read the width back through `inner_width`.
        let fired: Vec<Rc<dyn Fn()>> = {
            let mut state = self.state.borrow_mut();
            state.width = width.map(f64::floor);
            let mut fired = Vec::new();
            for i in 0..state.watches.len() {
                let now = state.matches(&state.watches[i].query);
                let watch = &mut state.watches[i];
                if watch.matched != now {
                    watch.matched = now;
                    fired.push(watch.on_change.clone());
                }
            }
            fired
        };

        for on_change in fired {
            on_change();
        }
    }
}

impl Viewport for ManualViewport {
    type Subscription = ManualSubscription;

    fn inner_width(&self) -> Result<f64, ViewportError> {
        self.state.borrow().width.ok_or(ViewportError::Unavailable)
    }

    fn watch(
        &self,
        query: &WidthQuery,
        on_change: Rc<dyn Fn()>,
    ) -> Result<ManualSubscription, ViewportError> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let matched = state.matches(query);
        state.watches.push(Watch {
            id,
            query: *query,
            matched,
            on_change,
        });

        Ok(ManualSubscription {
            id,
            state: Rc::downgrade(&self.state),
        })
    }
}

/// Deregisters its watch when dropped.
pub struct ManualSubscription {
    id: u64,
    state: Weak<RefCell<State>>,
}

impl Drop for ManualSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().watches.retain(|w| w.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Rc<dyn Fn()>) {
        let count = Rc::new(Cell::new(0));
        let on_change: Rc<dyn Fn()> = {
            let count = count.clone();
            Rc::new(move || count.set(count.get() + 1))
        };
        (count, on_change)
    }

    #[test]
    fn fires_only_on_truth_changes() {
        let viewport = ManualViewport::new(Some(1024.0));
        let (count, on_change) = counter();
        let _sub = viewport
            .watch(&WidthQuery::max_width(767), on_change)
            .unwrap();

        viewport.resize(900.0);
        assert_eq!(count.get(), 0);

        viewport.resize(767.0);
        assert_eq!(count.get(), 1);

        viewport.resize(400.0);
        assert_eq!(count.get(), 1);

        viewport.resize(768.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn widths_are_floored_to_whole_pixels() {
        let viewport = ManualViewport::new(Some(767.9));
        assert_eq!(viewport.inner_width(), Ok(767.0));

        viewport.resize(1200.4);
        assert_eq!(viewport.inner_width(), Ok(1200.0));
    }

    #[test]
    fn fractional_crossing_fires() {
        let viewport = ManualViewport::new(Some(1200.0));
        let (count, on_change) = counter();
        let _sub = viewport
            .watch(&WidthQuery::max_width(767), on_change)
            .unwrap();

        viewport.resize(767.5);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let viewport = ManualViewport::new(Some(1024.0));
        let (count, on_change) = counter();
        let sub = viewport
            .watch(&WidthQuery::max_width(767), on_change)
            .unwrap();
        assert_eq!(viewport.listener_count(), 1);

        drop(sub);
        assert_eq!(viewport.listener_count(), 0);

        viewport.resize(300.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn detached_surface_has_no_width() {
        let viewport = ManualViewport::new(Some(500.0));
        viewport.detach();
        assert_eq!(viewport.inner_width(), Err(ViewportError::Unavailable));
    }

    #[test]
    fn subscription_outliving_viewport_is_harmless() {
        let viewport = ManualViewport::new(Some(500.0));
        let (_count, on_change) = counter();
        let sub = viewport
            .watch(&WidthQuery::max_width(767), on_change)
            .unwrap();
        drop(viewport);
        drop(sub);
    }
}
