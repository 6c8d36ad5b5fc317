//! Hero banner: name, tagline, social links, particle background.

use leptos::html;
use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{OWNER_NAME, SOCIAL_LINKS, TAGLINE};
use crate::pages::portfolio::SectionRefs;
use crate::state::section::Section;
use crate::util::dom::scroll_to;
use crate::util::particles::particles;

#[component]
pub fn HeroSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let refs = expect_context::<SectionRefs>();

    view! {
        <section id=Section::Hero.id() class="hero" node_ref=section_ref>
            <div class="hero-background">
                <div class="hero-gradient"></div>
                {particles()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="hero-content">
                <div class="animate-fade-in-up" style="--stagger: 0">
                    <h1 class="hero-title">{OWNER_NAME}</h1>
                    <p class="hero-subtitle">{TAGLINE}</p>
                </div>

                <div class="social-links animate-fade-in-up" style="--stagger: 1">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            let target = link.is_external().then_some("_blank");
                            let rel = link.is_external().then_some("noopener noreferrer");
                            view! {
                                <a href=link.href target=target rel=rel class="social-link" aria-label=link.label>
                                    <Icon kind=link.icon/>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="scroll-down animate-fade-in-up"
                    style="--stagger: 2"
                    aria-label="Scroll to about"
                    on:click=move |_| scroll_to(refs.node(Section::About))
                >
                    <Icon kind=IconKind::ChevronDown size=32/>
                </button>
            </div>
        </section>
    }
}
