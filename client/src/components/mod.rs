//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and content sections while reading
//! shared state from Leptos context providers.

pub mod about;
pub mod contact;
pub mod cursor_follower;
pub mod hero;
pub mod icons;
pub mod loading_screen;
pub mod nav_bar;
pub mod projects;
pub mod section_header;
pub mod skills;
pub mod theme_toggle;
