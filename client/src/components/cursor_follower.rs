//! Custom cursor follower tracking mouse movement.

use leptos::prelude::*;

use crate::util::cursor::INITIAL_TRANSFORM;

/// A small circle that follows the pointer.
///
/// Listens for `mousemove` on the window while mounted.
#[component]
pub fn CursorFollower() -> impl IntoView {
    let transform = RwSignal::new(INITIAL_TRANSFORM.to_owned());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            transform.set(crate::util::cursor::follower_transform(ev.client_x(), ev.client_y()));
        });
        on_cleanup(move || handle.remove());
    }

    view! { <div class="custom-cursor" style:transform=move || transform.get()></div> }
}
