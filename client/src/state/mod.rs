//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`section`, `theme`, `ui`) so individual
//! components can depend on small focused models.

pub mod section;
pub mod theme;
pub mod ui;
