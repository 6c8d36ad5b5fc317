//! Skills section: one card per category.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::{SKILL_CATEGORIES, SkillCategory};
use crate::state::section::Section;
use crate::state::ui::UiState;

#[component]
pub fn SkillsSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section
            id=Section::Skills.id()
            class="section skills-section reveal"
            class:revealed=move || ui.with(|u| u.revealed.is_revealed(Section::Skills))
            node_ref=section_ref
        >
            <div class="section-container">
                <SectionHeader title="Skills"/>
                <div class="skills-grid">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .map(|category| view! { <SkillCard category=category/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="skill-card">
            <div class="skill-icon">
                <Icon kind=category.icon size=32/>
            </div>
            <h3 class="skill-title">{category.title}</h3>
            <ul class="skill-list">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="skill-item">
                                <div class="skill-bullet"></div>
                                {*skill}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
