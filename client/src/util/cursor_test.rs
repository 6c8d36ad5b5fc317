use super::*;

#[test]
fn follower_is_offset_by_half_its_size() {
    assert_eq!(follower_transform(100, 200), "translate(90px, 190px)");
}

#[test]
fn follower_at_origin_goes_negative() {
    assert_eq!(follower_transform(0, 0), "translate(-10px, -10px)");
}

#[test]
fn initial_transform_centers_on_own_box() {
    assert_eq!(INITIAL_TRANSFORM, "translate(-50%, -50%)");
}
