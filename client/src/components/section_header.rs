//! Title plus divider used at the top of each content section.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <div class="section-divider"></div>
        </div>
    }
}
