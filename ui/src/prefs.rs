//! Layout preferences.

use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Which layout the app renders.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Follow the viewport width.
    #[default]
    Auto,
    /// Always render the mobile layout.
    Mobile,
    /// Always render the desktop layout.
    Desktop,
}

impl ViewMode {
    /// The next mode in the toggle cycle `auto -> mobile -> desktop -> auto`.
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Mobile,
            Self::Mobile => Self::Desktop,
            Self::Desktop => Self::Auto,
        }
    }
}

/// Represents all layout prefs.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LayoutPrefs {
    view_mode: ViewMode,
}

impl LayoutPrefs {
    pub fn new(view_mode: ViewMode) -> Self {
        Self { view_mode }
    }

    /// Reads prefs from environment variables.
    ///
    /// # Environment Variables
    /// - `VIEW_MODE`: "auto", "mobile" or "desktop" (case-insensitive).
    ///   Defaults to "auto". Browsers have no environment, so web builds
    ///   always start in "auto".
    pub fn from_env() -> Self {
        Self::from_view_mode_var(env::var("VIEW_MODE").ok().as_deref())
    }

    fn from_view_mode_var(value: Option<&str>) -> Self {
        let view_mode = match value {
            None => ViewMode::default(),
            Some(raw) => ViewMode::from_str(raw.trim()).unwrap_or_else(|_| {
                dioxus_logger::tracing::warn!("ignoring unknown VIEW_MODE {:?}", raw);
                ViewMode::default()
            }),
        };
        Self { view_mode }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Decides whether to render the mobile layout, given the live
    /// breakpoint reading.
    pub fn resolve(&self, is_mobile: bool) -> bool {
        match self.view_mode {
            ViewMode::Auto => is_mobile,
            ViewMode::Mobile => true,
            ViewMode::Desktop => false,
        }
    }
}

impl Default for LayoutPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!(ViewMode::from_str("mobile"), Ok(ViewMode::Mobile));
        assert_eq!(ViewMode::from_str("DESKTOP"), Ok(ViewMode::Desktop));
        assert_eq!(ViewMode::from_str("Auto"), Ok(ViewMode::Auto));
        assert!(ViewMode::from_str("tablet").is_err());
    }

    #[test]
    fn view_mode_displays_lowercase() {
        assert_eq!(ViewMode::Mobile.to_string(), "mobile");
    }

    #[test]
    fn missing_or_bad_var_means_auto() {
        assert_eq!(LayoutPrefs::from_view_mode_var(None).view_mode(), ViewMode::Auto);
        assert_eq!(
            LayoutPrefs::from_view_mode_var(Some("phablet")).view_mode(),
            ViewMode::Auto
        );
        assert_eq!(
            LayoutPrefs::from_view_mode_var(Some(" Mobile ")).view_mode(),
            ViewMode::Mobile
        );
    }

    #[test]
    fn resolve_follows_viewport_only_in_auto() {
        let auto = LayoutPrefs::new(ViewMode::Auto);
        assert!(auto.resolve(true));
        assert!(!auto.resolve(false));

        assert!(LayoutPrefs::new(ViewMode::Mobile).resolve(false));
        assert!(!LayoutPrefs::new(ViewMode::Desktop).resolve(true));
    }

    #[test]
    fn toggle_cycles_through_all_modes() {
        let mut mode = ViewMode::Auto;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ViewMode::Auto);
    }

    #[test]
    fn prefs_round_trip_through_json() {
        let json = serde_json::to_string(&LayoutPrefs::new(ViewMode::Desktop)).unwrap();
        assert_eq!(json, r#"{"view_mode":"desktop"}"#);
    }
}
