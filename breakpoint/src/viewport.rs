use std::rc::Rc;

use crate::error::ViewportError;
use crate::threshold::WidthQuery;

/// The platform facilities a [`crate::BreakpointObserver`] consumes.
pub trait Viewport {
    /// Dropping the subscription deregisters the callback.
    type Subscription;

    /// Current viewport width in logical pixels.
    fn inner_width(&self) -> Result<f64, ViewportError>;

    /// Calls `on_change` every time `query` changes truth value.
    fn watch(
        &self,
        query: &WidthQuery,
        on_change: Rc<dyn Fn()>,
    ) -> Result<Self::Subscription, ViewportError>;
}
