//! Custom cursor follower positioning.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Rendered width and height of the follower, in CSS pixels.
pub const CURSOR_SIZE_PX: i32 = 20;

/// Transform used before the first mouse move.
pub const INITIAL_TRANSFORM: &str = "translate(-50%, -50%)";

/// CSS transform centering the follower on the pointer.
#[must_use]
pub fn follower_transform(client_x: i32, client_y: i32) -> String {
    let half = CURSOR_SIZE_PX / 2;
    format!("translate({}px, {}px)", client_x - half, client_y - half)
}
