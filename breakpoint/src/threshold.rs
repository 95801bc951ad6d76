use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Viewports narrower than this many logical pixels count as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// A single width threshold separating the mobile and desktop layouts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Breakpoint {
    threshold: u32,
}

impl Breakpoint {
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// The measurement: is `width` strictly below the threshold?
    pub fn is_below(&self, width: f64) -> bool {
        width < f64::from(self.threshold)
    }

    /// The media query that flips whenever the measurement may change.
    ///
    /// Media queries are inclusive, so the query for "below 768" is
    /// `(max-width: 767px)`.
    pub fn query(&self) -> WidthQuery {
        WidthQuery::max_width(self.threshold.saturating_sub(1))
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT)
    }
}

/// A `max-width` media query over the viewport width.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct WidthQuery {
    max_width: u32,
}

impl WidthQuery {
    pub const fn max_width(max_width: u32) -> Self {
        Self { max_width }
    }

    pub fn max(&self) -> u32 {
        self.max_width
    }

    pub fn matches(&self, width: f64) -> bool {
        width <= f64::from(self.max_width)
    }
}

impl fmt::Display for WidthQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(max-width: {}px)", self.max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_mobile_breakpoint() {
        assert_eq!(Breakpoint::default().threshold(), 768);
    }

    #[test]
    fn measurement_boundary() {
        let bp = Breakpoint::default();
        assert!(bp.is_below(767.0));
        assert!(bp.is_below(767.5));
        assert!(!bp.is_below(768.0));
        assert!(!bp.is_below(1024.0));
    }

    #[test]
    fn query_is_one_below_threshold() {
        let query = Breakpoint::default().query();
        assert_eq!(query.max(), 767);
        assert_eq!(query.to_string(), "(max-width: 767px)");
        assert!(query.matches(767.0));
        assert!(!query.matches(768.0));
    }

    #[test]
    fn zero_threshold_does_not_underflow() {
        let bp = Breakpoint::new(0);
        assert_eq!(bp.query().max(), 0);
        assert!(!bp.is_below(0.0));
    }

    #[test]
    fn breakpoint_deserializes_from_prefs_json() {
        let bp: Breakpoint = serde_json::from_str(r#"{"threshold":600}"#).unwrap();
        assert_eq!(bp, Breakpoint::new(600));
        assert!(bp.is_below(599.0));
    }
}
