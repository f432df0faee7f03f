// Host-side tests for constants and their geometric relationships.
// The main crate is wasm-only, so the DOM/GPU constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use lipstick_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn parts_nest_inside_the_case() {
    // Each part is narrower than the one it sits on.
    assert!(RING_RADIUS < CASE_RADIUS);
    assert!(TUBE_RADIUS < RING_RADIUS);
    assert!(BULLET_RADIUS < TUBE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parts_stack_upwards() {
    assert!(CASE_Y < RING_Y);
    assert!(RING_Y < TUBE_Y);
    assert!(TUBE_Y < BULLET_Y);
    // The ring straddles the top of the case.
    let case_top = CASE_Y + CASE_HEIGHT * 0.5;
    assert!(RING_Y - RING_HEIGHT * 0.5 <= case_top);
    assert!(RING_Y + RING_HEIGHT * 0.5 >= case_top);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_is_well_formed() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(CAMERA_EYE.z > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(PARALLAX_DAMPING > 0.0 && PARALLAX_DAMPING <= 1.0);
    assert!(SPIN_PER_TICK > 0.0);
    assert!(FLOAT_AMPLITUDE > 0.0);
    assert!(FLOAT_RATE_PER_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speckle_and_thresholds() {
    assert!(SPECKLE_SIZE.is_power_of_two());
    assert!(SPECKLE_MAX_OPACITY > 0.0 && SPECKLE_MAX_OPACITY <= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(SCROLLED_THRESHOLD_PX >= 0.0);
}

#[test]
fn dom_hooks_are_distinct() {
    let ids = [
        PRODUCT_CONTAINER_ID,
        PRODUCT_LOADING_ID,
        NAV_ID,
        MOBILE_MENU_ID,
        MENU_OPEN_ID,
        MENU_CLOSE_ID,
        NAV_LINKS_ID,
        MOBILE_LINKS_ID,
        HERO_FEATURES_ID,
        BRAND_TRACK_ID,
        STORY_STATS_ID,
        COLLECTION_GRID_ID,
        REVIEWS_TRACK_ID,
        REVIEWS_TRACK_REVERSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(REVEAL_SELECTOR, format!("[{}]", "data-reveal"));
}

#[test]
fn gpu_formats() {
    assert!(DEPTH_FORMAT.has_depth_aspect());
    assert_eq!(BUMP_FORMAT.block_copy_size(None), Some(1));
    assert_eq!(CLEAR_COLOR.a, 0.0);
}
