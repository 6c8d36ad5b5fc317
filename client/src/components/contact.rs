//! Contact section and page footer.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::content::{CONTACT_HEADING, CONTACT_TEXT, CONTACTS, FOOTER_TEXT, contact_mailto};
use crate::state::section::Section;
use crate::state::ui::UiState;

#[component]
pub fn ContactSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section
            id=Section::Contact.id()
            class="section contact-section reveal"
            class:revealed=move || ui.with(|u| u.revealed.is_revealed(Section::Contact))
            node_ref=section_ref
        >
            <div class="contact-container">
                <h2 class="section-title">{CONTACT_HEADING}</h2>
                <div class="section-divider"></div>
                <p class="contact-text">{CONTACT_TEXT}</p>

                <div class="contact-grid">
                    {CONTACTS
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="contact-item">
                                    <div class="contact-icon">
                                        <Icon kind=entry.icon size=32/>
                                    </div>
                                    <div>
                                        <h3 class="contact-title">{entry.title}</h3>
                                        <p class="contact-value">{entry.value}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <a class="contact-btn" href=contact_mailto()>
                    "Get In Touch"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-content">
                <p class="footer-text">{FOOTER_TEXT}</p>
            </div>
        </footer>
    }
}
