//! Browser geometry and scrolling glue.
//!
//! Every helper degrades to `None` or a no-op outside hydrate builds and
//! when the browser objects it needs are missing.

use leptos::html;
use leptos::prelude::*;

use crate::util::section_band::RegionRect;

/// Current `window.innerHeight`, in CSS pixels.
pub fn viewport_height() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_height().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Viewport-relative vertical extent of a mounted section.
pub fn region_rect(node: NodeRef<html::Section>) -> Option<RegionRect> {
    #[cfg(feature = "hydrate")]
    {
        let rect = node.get_untracked()?.get_bounding_client_rect();
        Some(RegionRect::new(rect.top(), rect.bottom()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        None
    }
}

/// Smooth-scroll a mounted section into view.
pub fn scroll_to(node: NodeRef<html::Section>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = node.get_untracked() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
    }
}

/// Milliseconds since the epoch, for scroll sampling.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
