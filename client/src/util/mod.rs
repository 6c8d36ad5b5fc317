//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the page's
//! decision logic from components, so the logic is testable natively.

pub mod cursor;
pub mod dom;
pub mod particles;
pub mod sampling;
pub mod section_band;
pub mod storage;
pub mod theme;
