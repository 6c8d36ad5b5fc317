//! Projects section: a card per project with code and live links.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::{PROJECTS, Project};
use crate::state::section::Section;
use crate::state::ui::UiState;

#[component]
pub fn ProjectsSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section
            id=Section::Projects.id()
            class="section reveal"
            class:revealed=move || ui.with(|u| u.revealed.is_revealed(Section::Projects))
            node_ref=section_ref
        >
            <div class="section-container">
                <SectionHeader title="Projects"/>
                <div class="projects-grid">
                    {PROJECTS
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-image">
                <Icon kind=IconKind::Code size=64/>
            </div>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-desc">{project.description}</p>
            <div class="project-tech">
                {project
                    .tech
                    .iter()
                    .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-links">
                <a href=project.code_url target="_blank" rel="noopener noreferrer" class="project-link">
                    <Icon kind=IconKind::Github size=16/>
                    <span>"Code"</span>
                </a>
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="project-link">
                                <Icon kind=IconKind::ExternalLink size=16/>
                                <span>"Live"</span>
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
