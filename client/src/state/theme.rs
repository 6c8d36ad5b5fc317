//! Display theme preference.
//!
//! DESIGN
//! ======
//! The complement operation is pure; persistence lives in
//! [`crate::util::theme`] so toggling can be tested without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Dark/light display mode persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// The literal written to storage and used as the root element class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored literal. Anything other than `"dark"` or `"light"` is
    /// unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The logical complement.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Accessible label for the control that switches away from `self`.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }
}
