use std::cell::Cell;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::rc::Weak;

type Listener = Box<dyn FnMut(bool)>;

struct Inner {
    value: Cell<Option<bool>>,
    writes: Cell<u64>,
    next_listener: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// An observable boolean cell: `true` while the viewport is mobile-sized.
///
/// Internally the cell starts out unmeasured. Readers never see that state,
/// [`MobileSignal::get`] reports it as `false`.
///
/// Clones are handles to the same cell.
#[derive(Clone)]
pub struct MobileSignal {
    inner: Rc<Inner>,
}

impl MobileSignal {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                value: Cell::new(None),
                writes: Cell::new(0),
                next_listener: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The current value, with "not yet measured" read as `false`.
    pub fn get(&self) -> bool {
        self.inner.value.get().unwrap_or(false)
    }

    /// Whether a measurement has ever been written.
    pub fn is_measured(&self) -> bool {
        self.inner.value.get().is_some()
    }

    /// Number of writes since creation.
    pub fn writes(&self) -> u64 {
        self.inner.writes.get()
    }

    /// Writes a measurement and notifies subscribers.
    ///
    /// Subscribers must not write back into this cell, or drop their
    /// [`SignalSubscription`], from inside their callback.
    pub fn set(&self, value: bool) {
        self.inner.value.set(Some(value));
        self.inner.writes.set(self.inner.writes.get() + 1);
        for (_, listener) in self.inner.listeners.borrow_mut().iter_mut() {
            listener(value);
        }
    }

    /// Registers `f` to be called with every value written from now on,
    /// until the returned subscription is dropped.
    pub fn subscribe(&self, f: impl FnMut(bool) + 'static) -> SignalSubscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Box::new(f)));
        SignalSubscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Removes its listener from the [`MobileSignal`] when dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct SignalSubscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Default for MobileSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MobileSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MobileSignal")
            .field("value", &self.inner.value.get())
            .field("writes", &self.inner.writes.get())
            .finish()
    }
}
