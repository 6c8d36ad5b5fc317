//! Sun/moon button switching the display theme.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::theme::ThemeStore;

/// Theme toggle for the navigation bar.
///
/// Persists through the shared [`ThemeStore`]; the root `<html>` flag is
/// applied by the effect in `App` that watches `UiState::theme`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let store = expect_context::<StoredValue<ThemeStore<BrowserStorage>>>();

    let on_click = move |_| {
        let current = ui.with_untracked(|u| u.theme);
        let mut next = current.toggled();
        store.update_value(|s| next = s.toggle(current));
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            title=move || ui.with(|u| u.theme.toggle_label())
            on:click=on_click
        >
            {move || {
                let kind = if ui.with(|u| u.theme.is_dark()) { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind=kind size=20/> }
            }}
        </button>
    }
}
