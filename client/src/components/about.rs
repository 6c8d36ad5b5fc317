//! About section with bio, CV actions and profile photo.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::{ABOUT_PARAGRAPHS, CV_DOWNLOAD_URL, CV_FILENAME, CV_VIEW_URL, OWNER_NAME, PROFILE_IMAGE};
use crate::state::section::Section;
use crate::state::ui::UiState;

#[component]
pub fn AboutSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section
            id=Section::About.id()
            class="section reveal"
            class:revealed=move || ui.with(|u| u.revealed.is_revealed(Section::About))
            node_ref=section_ref
        >
            <div class="section-container">
                <SectionHeader title="About Me"/>

                <div class="about-grid">
                    <div class="about-text">
                        {ABOUT_PARAGRAPHS.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
                        <div class="cv-actions">
                            <a
                                class="download-btn"
                                href=CV_DOWNLOAD_URL
                                download=CV_FILENAME
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <Icon kind=IconKind::Download size=18/>
                                "Download CV"
                            </a>
                            <a class="view-btn" href=CV_VIEW_URL target="_blank" rel="noopener noreferrer">
                                <Icon kind=IconKind::ExternalLink size=18/>
                                "View CV"
                            </a>
                        </div>
                    </div>
                    <div class="about-visual">
                        <div class="visual-outer">
                            <img src=PROFILE_IMAGE alt=OWNER_NAME class="profile-photo"/>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
