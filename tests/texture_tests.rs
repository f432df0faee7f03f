// Host-side tests for the speckled bump map.

use lipstick_core::*;

fn small(dots: u32) -> SpeckleParams {
    SpeckleParams {
        size: 64,
        dots,
        ..SpeckleParams::default()
    }
}

#[test]
fn default_bump_map_is_512_square() {
    let map = BumpMap::speckle(&SpeckleParams::default(), 42);
    assert_eq!((map.width, map.height), (512, 512));
    assert_eq!(map.texels.len(), 512 * 512);
}

#[test]
fn same_seed_gives_identical_texels() {
    let a = BumpMap::speckle(&small(2000), 1234);
    let b = BumpMap::speckle(&small(2000), 1234);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = BumpMap::speckle(&small(2000), 1);
    let b = BumpMap::speckle(&small(2000), 2);
    assert_ne!(a.texels, b.texels);
}

#[test]
fn no_dots_leaves_a_white_canvas() {
    let map = BumpMap::speckle(&small(0), 5);
    assert!(map.texels.iter().all(|&t| t == 255));
    assert_eq!(map.mean(), 1.0);
}

#[test]
fn dots_darken_only_faintly() {
    let map = BumpMap::speckle(&small(2000), 77);
    let mean = map.mean();
    assert!(mean < 1.0, "some texels darkened");
    assert!(mean > 0.95, "speckle stays faint, mean {mean}");
    // A single dot removes at most its opacity from a texel.
    let floor = ((1.0 - SpeckleParams::default().max_opacity) * 255.0).floor() as u8;
    let darkest = *map.texels.iter().min().expect("non-empty");
    assert!(darkest < 255);
    assert!(darkest as f32 > floor as f32 - 40.0);
}

#[test]
fn texel_lookup_is_bounds_checked() {
    let map = BumpMap::speckle(&small(10), 3);
    assert!(map.texel(0, 0).is_some());
    assert!(map.texel(63, 63).is_some());
    assert_eq!(map.texel(64, 0), None);
    assert_eq!(map.texel(0, 64), None);
}
