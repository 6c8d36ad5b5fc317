//! Page sections and the currently active one.
//!
//! DESIGN
//! ======
//! `ActiveSection` is an immutable value. Each resolver pass produces the next
//! value and the page publishes it through a single reactive setter, so the
//! navigation bar only ever observes whole transitions.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// A named region of the portfolio page.
///
/// Declaration order is the resolver's evaluation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections in evaluation order.
    pub const ALL: [Section; 5] = [Self::Hero, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// Sections linked from the navigation bar.
    pub const NAV: [Section; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// Sections that fade in as they scroll into view. The hero uses the
    /// entrance animation instead.
    pub const REVEALED_ON_SCROLL: [Section; 4] = Self::NAV;

    /// Position in [`Section::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::About => 1,
            Self::Skills => 2,
            Self::Projects => 3,
            Self::Contact => 4,
        }
    }

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation link text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// The single section currently considered in view. Defaults to the hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection(Section);

impl ActiveSection {
    #[cfg(test)]
    pub(crate) fn new(section: Section) -> Self {
        Self(section)
    }

    #[must_use]
    pub fn section(self) -> Section {
        self.0
    }

    #[must_use]
    pub fn is(self, section: Section) -> bool {
        self.0 == section
    }

    /// Next value after a resolver pass. A pass that matched nothing keeps
    /// the current section.
    #[must_use]
    pub fn advance(self, resolved: Option<Section>) -> Self {
        resolved.map_or(self, Self)
    }
}
