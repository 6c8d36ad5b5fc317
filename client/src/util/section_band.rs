//! Active-section resolution against the viewport reading band.
//!
//! DESIGN
//! ======
//! A region is in the reading band when its top edge is above 70% of the
//! viewport height and its bottom edge is below 30% of it. Sections are
//! evaluated in [`Section::ALL`] order and the last one in the band wins, so
//! when two regions straddle the band the later section is published.
//!
//! Geometry is supplied through a closure so the comparison logic stays
//! independent of the DOM and of scroll event frequency.

#[cfg(test)]
#[path = "section_band_test.rs"]
mod section_band_test;

use crate::state::section::{ActiveSection, Section};
use crate::util::sampling::{Sampler, SamplingPolicy};

pub const BAND_UPPER_FRACTION: f64 = 0.3;
pub const BAND_LOWER_FRACTION: f64 = 0.7;

/// Vertical extent of a region relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionRect {
    pub top: f64,
    pub bottom: f64,
}

impl RegionRect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// The central reading band, as fractions of viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingBand {
    pub upper: f64,
    pub lower: f64,
}

impl Default for ReadingBand {
    fn default() -> Self {
        Self { upper: BAND_UPPER_FRACTION, lower: BAND_LOWER_FRACTION }
    }
}

impl ReadingBand {
    /// Whether `rect` occupies the band of a viewport `viewport_height` tall.
    #[must_use]
    pub fn contains(&self, rect: RegionRect, viewport_height: f64) -> bool {
        rect.top < viewport_height * self.lower && rect.bottom > viewport_height * self.upper
    }

    /// The last section, in evaluation order, whose region is in the band.
    ///
    /// `measure` returns `None` for sections without layout; they are skipped.
    pub fn resolve<F>(&self, viewport_height: f64, mut measure: F) -> Option<Section>
    where
        F: FnMut(Section) -> Option<RegionRect>,
    {
        let mut active = None;
        for section in Section::ALL {
            let Some(rect) = measure(section) else {
                continue;
            };
            if self.contains(rect, viewport_height) {
                active = Some(section);
            }
        }
        active
    }
}

/// Band plus sampling policy; the page keeps one per mount.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionTracker {
    band: ReadingBand,
    sampler: Sampler,
}

impl SectionTracker {
    #[must_use]
    pub fn new(band: ReadingBand, policy: SamplingPolicy) -> Self {
        Self { band, sampler: Sampler::new(policy) }
    }

    #[cfg(test)]
    pub(crate) fn band(&self) -> ReadingBand {
        self.band
    }

    /// Unconditional pass, used once at mount.
    pub fn pass<F>(&self, current: ActiveSection, viewport_height: f64, measure: F) -> ActiveSection
    where
        F: FnMut(Section) -> Option<RegionRect>,
    {
        current.advance(self.band.resolve(viewport_height, measure))
    }

    /// Pass for a scroll event at `now_ms`. `None` when the sampler drops
    /// the event.
    pub fn on_scroll<F>(
        &mut self,
        now_ms: f64,
        current: ActiveSection,
        viewport_height: f64,
        measure: F,
    ) -> Option<ActiveSection>
    where
        F: FnMut(Section) -> Option<RegionRect>,
    {
        if !self.sampler.admit(now_ms) {
            return None;
        }
        Some(self.pass(current, viewport_height, measure))
    }
}
