//! Dioxus hooks shared by the screens.

pub mod use_is_mobile;

use std::cell::RefCell;
use std::rc::Rc;

use breakpoint::Breakpoint;
use breakpoint::BreakpointObserver;
use breakpoint::SignalSubscription;
use breakpoint::Viewport;
use dioxus::prelude::*;

/// Ties a [`BreakpointObserver`] to the calling component's lifetime.
///
/// The observer is created and measured on the first render, starts listening
/// once the component is mounted, and stops when it is dropped from the tree.
/// Every platform flavour of `use_is_mobile` funnels through here.
fn use_breakpoint_observer<V: Viewport + 'static>(viewport: impl FnOnce() -> V) -> Memo<bool> {
    let observer = use_hook(|| {
        Rc::new(RefCell::new(BreakpointObserver::create(
            viewport(),
            Breakpoint::default(),
        )))
    });
    let subscription = use_hook(|| Rc::new(RefCell::new(None::<SignalSubscription>)));
    let mut is_mobile = use_signal(|| observer.borrow().is_mobile());

    use_effect({
        let observer = observer.clone();
        let subscription = subscription.clone();
        move || {
            let mut observer = observer.borrow_mut();
            if observer.is_active() {
                return;
            }
            subscription.replace(Some(
                observer.signal().subscribe(move |value| is_mobile.set(value)),
            ));
            observer.activate();
        }
    });

    // The component's signal is gone after unmount, so the forwarding
    // subscription goes first.
    use_drop(move || {
        drop(subscription.take());
        observer.borrow_mut().deactivate();
    });

    use_memo(move || is_mobile())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use breakpoint::ManualViewport;
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    #[derive(Clone)]
    struct Harness {
        viewport: ManualViewport,
        show: Rc<Cell<Option<Signal<bool>>>>,
        seen: Rc<RefCell<Vec<bool>>>,
    }

    impl Harness {
        fn new(width: f64) -> Self {
            Self {
                viewport: ManualViewport::new(Some(width)),
                show: Rc::new(Cell::new(None)),
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn last_seen(&self) -> Option<bool> {
            self.seen.borrow().last().copied()
        }
    }

    fn app(harness: Harness) -> Element {
        use_context_provider(|| harness.clone());
        let show = use_signal(|| true);
        harness.show.set(Some(show));

        rsx! {
            if show() {
                Watcher {}
            }
        }
    }

    #[allow(non_snake_case)]
    fn Watcher() -> Element {
        let harness = use_context::<Harness>();
        let viewport = harness.viewport.clone();
        let is_mobile = use_breakpoint_observer(move || viewport);
        harness.seen.borrow_mut().push(is_mobile());

        rsx! { "{is_mobile}" }
    }

    /// Lets pending effects, drops and re-renders run.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn set_show(dom: &VirtualDom, harness: &Harness, value: bool) {
        let mut show = harness.show.get().expect("app rendered");
        dom.in_runtime(|| show.set(value));
    }

    #[tokio::test]
    async fn listener_follows_mount_and_unmount() {
        let harness = Harness::new(1024.0);
        let mut dom = VirtualDom::new_with_props(app, harness.clone());
        dom.rebuild_in_place();
        settle(&mut dom).await;

        assert_eq!(harness.viewport.listener_count(), 1);
        assert_eq!(harness.last_seen(), Some(false));

        // re-rendering the parent must not register a second listener
        set_show(&dom, &harness, true);
        settle(&mut dom).await;
        assert_eq!(harness.viewport.listener_count(), 1);

        dom.in_runtime(|| harness.viewport.resize(500.0));
        settle(&mut dom).await;
        assert_eq!(harness.last_seen(), Some(true));

        set_show(&dom, &harness, false);
        settle(&mut dom).await;
        assert_eq!(harness.viewport.listener_count(), 0);

        let before = harness.seen.borrow().clone();
        dom.in_runtime(|| harness.viewport.resize(1200.0));
        settle(&mut dom).await;
        assert_eq!(*harness.seen.borrow(), before);
        assert_eq!(harness.last_seen(), Some(true));
    }

    #[tokio::test]
    async fn narrow_start_reads_mobile_on_first_render() {
        let harness = Harness::new(375.0);
        let mut dom = VirtualDom::new_with_props(app, harness.clone());
        dom.rebuild_in_place();

        assert_eq!(harness.seen.borrow().first().copied(), Some(true));

        settle(&mut dom).await;
        assert_eq!(harness.last_seen(), Some(true));
    }
}
