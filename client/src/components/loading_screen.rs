//! Full-screen loading overlay shown until the startup timer fires.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Delay before the overlay fades out.
pub const LOADING_DELAY_MS: u32 = 2000;

/// Loading overlay. Fades out (CSS transition) once `UiState::loading` clears.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let timer = gloo_timers::callback::Timeout::new(LOADING_DELAY_MS, move || {
            ui.update(|u| u.loading = false);
        });
        // Dropping the handle cancels the timer if the page unmounts first.
        let pending = StoredValue::new_local(Some(timer));
        on_cleanup(move || pending.update_value(|timer| drop(timer.take())));
    }

    view! {
        <div class="loading-screen" class:done=move || !ui.with(|u| u.loading) aria-hidden="true">
            <div class="loading-inner">
                <div class="loading-spinner"></div>
                <div class="loading-text">"Loading Portfolio..."</div>
            </div>
        </div>
    }
}
