//! Fixed navigation bar with section links and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::LOGO_TEXT;
use crate::pages::portfolio::SectionRefs;
use crate::state::section::{ActiveSection, Section};
use crate::util::dom::scroll_to;

/// Navigation bar. The link for the active section carries `.active`.
#[component]
pub fn NavBar() -> impl IntoView {
    let active = expect_context::<RwSignal<ActiveSection>>();
    let refs = expect_context::<SectionRefs>();

    view! {
        <nav>
            <div class="nav-container">
                <div class="nav-content">
                    <div class="logo">{LOGO_TEXT}</div>
                    <div class="nav-links">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class:active=move || active.get().is(section)
                                        on:click=move |_| scroll_to(refs.node(section))
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <ThemeToggle/>
                    </div>
                </div>
            </div>
        </nav>
    }
}
