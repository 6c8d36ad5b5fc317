//! Local UI chrome state (theme, loading overlay, revealed sections).
//!
//! DESIGN
//! ======
//! Keeps presentation flags out of the section-tracking state so the
//! navigation bar and the scroll reveal can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::section::Section;
use crate::state::theme::ThemePreference;

/// UI state shared through context as an `RwSignal<UiState>`.
///
/// `theme` starts at the default so server and client render the same
/// markup; the stored preference is applied once the page hydrates.
#[derive(Clone, Debug)]
pub struct UiState {
    pub theme: ThemePreference,
    pub loading: bool,
    pub revealed: RevealedSections,
}

impl Default for UiState {
    fn default() -> Self {
        Self { theme: ThemePreference::default(), loading: true, revealed: RevealedSections::default() }
    }
}

/// Fraction of viewport height a section's top must rise above before it is
/// revealed.
pub const REVEAL_START_FRACTION: f64 = 0.8;

/// Which sections have scrolled into view.
///
/// A section is revealed once its top edge crosses the reveal start line and
/// hidden again when scrolled back above it; leaving through the bottom of
/// the viewport keeps it revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealedSections([bool; Section::ALL.len()]);

impl RevealedSections {
    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.0[section.index()]
    }

    /// Recompute from the current layout. Sections without layout keep their
    /// previous state.
    #[must_use]
    pub fn measure<F>(mut self, viewport_height: f64, mut top_of: F) -> Self
    where
        F: FnMut(Section) -> Option<f64>,
    {
        for section in Section::REVEALED_ON_SCROLL {
            if let Some(top) = top_of(section) {
                self.0[section.index()] = top < viewport_height * REVEAL_START_FRACTION;
            }
        }
        self
    }
}
