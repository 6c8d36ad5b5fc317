//! The single portfolio page and its scroll orchestration.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `NodeRef` per section. A pass measures every mounted
//! section once and feeds the geometry to both the active-section tracker
//! and the scroll reveal. Passes run once after mount and then for every
//! scroll event the tracker's sampling policy admits.

use leptos::html;
use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::{ContactSection, Footer};
use crate::components::cursor_follower::CursorFollower;
use crate::components::hero::HeroSection;
use crate::components::loading_screen::LoadingScreen;
use crate::components::nav_bar::NavBar;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::state::section::{ActiveSection, Section};
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::section_band::SectionTracker;

/// Element handles for each page section, shared through context.
#[derive(Clone, Copy)]
pub struct SectionRefs {
    hero: NodeRef<html::Section>,
    about: NodeRef<html::Section>,
    skills: NodeRef<html::Section>,
    projects: NodeRef<html::Section>,
    contact: NodeRef<html::Section>,
}

impl SectionRefs {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hero: NodeRef::new(),
            about: NodeRef::new(),
            skills: NodeRef::new(),
            projects: NodeRef::new(),
            contact: NodeRef::new(),
        }
    }

    #[must_use]
    pub fn node(&self, section: Section) -> NodeRef<html::Section> {
        match section {
            Section::Hero => self.hero,
            Section::About => self.about,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Contact => self.contact,
        }
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure all sections and publish the results.
///
/// `now_ms` is `None` for the mount pass, which bypasses sampling.
#[cfg(feature = "hydrate")]
fn run_pass(
    refs: SectionRefs,
    tracker: StoredValue<SectionTracker>,
    active: RwSignal<ActiveSection>,
    ui: RwSignal<UiState>,
    now_ms: Option<f64>,
) {
    use crate::util::dom::{region_rect, viewport_height};

    let Some(height) = viewport_height() else {
        return;
    };
    let measure = |section: Section| region_rect(refs.node(section));
    let current = active.get_untracked();

    let mut next = None;
    match now_ms {
        None => tracker.with_value(|t| next = Some(t.pass(current, height, measure))),
        Some(now) => tracker.update_value(|t| next = t.on_scroll(now, current, height, measure)),
    }
    let Some(next) = next else {
        return;
    };

    if next != current {
        active.set(next);
    }

    let revealed = ui
        .with_untracked(|u| u.revealed)
        .measure(height, |section| measure(section).map(|rect| rect.top));
    if ui.with_untracked(|u| u.revealed != revealed) {
        ui.update(|u| u.revealed = revealed);
    }
}

/// Portfolio page: loading overlay, cursor, navigation and five sections.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = expect_context::<RwSignal<ActiveSection>>();
    let refs = SectionRefs::new();
    provide_context(refs);

    #[cfg(feature = "hydrate")]
    {
        let tracker = StoredValue::new(SectionTracker::default());
        let mounted = refs.node(Section::Hero);
        Effect::new(move || {
            if mounted.get().is_some() {
                run_pass(refs, tracker, active, ui, None);
            }
        });

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            run_pass(refs, tracker, active, ui, Some(crate::util::dom::now_ms()));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <LoadingScreen/>
        <div class="portfolio-container" class:ready=move || !ui.with(|u| u.loading)>
            <CursorFollower/>
            <NavBar/>
            <HeroSection section_ref=refs.node(Section::Hero)/>
            <AboutSection section_ref=refs.node(Section::About)/>
            <SkillsSection section_ref=refs.node(Section::Skills)/>
            <ProjectsSection section_ref=refs.node(Section::Projects)/>
            <ContactSection section_ref=refs.node(Section::Contact)/>
            <Footer/>
        </div>
    }
}
