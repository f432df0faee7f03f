// Host-side tests for pointer normalization and per-tick motion.

use glam::{Vec2, Vec3};
use lipstick_core::*;

fn rect() -> Rect {
    Rect {
        left: 10.0,
        top: 20.0,
        width: 400.0,
        height: 200.0,
    }
}

fn bare_group() -> Group {
    Group {
        parts: Vec::new(),
        rotation: Vec3::new(0.1, 0.0, 0.15),
        position: Vec3::ZERO,
    }
}

#[test]
fn pointer_maps_corners_and_centre() {
    let r = rect();
    let centre = Pointer::from_client(Vec2::new(210.0, 120.0), r);
    assert!(centre.x.abs() < 1e-6 && centre.y.abs() < 1e-6);

    let top_left = Pointer::from_client(Vec2::new(10.0, 20.0), r);
    assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));

    let bottom_right = Pointer::from_client(Vec2::new(410.0, 220.0), r);
    assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
}

#[test]
fn pointer_stays_in_unit_range_outside_the_container() {
    let r = rect();
    let samples = [
        (-1.0e6, -1.0e6),
        (1.0e6, 1.0e6),
        (0.0, 500.0),
        (9999.0, -3.0),
        (f32::MAX, f32::MIN),
    ];
    for (x, y) in samples {
        let p = Pointer::from_client(Vec2::new(x, y), r);
        assert!((-1.0..=1.0).contains(&p.x), "x {} for ({x}, {y})", p.x);
        assert!((-1.0..=1.0).contains(&p.y), "y {} for ({x}, {y})", p.y);
    }
}

#[test]
fn degenerate_rect_maps_to_centre() {
    let zero = Rect {
        width: 0.0,
        ..rect()
    };
    assert_eq!(Pointer::from_client(Vec2::new(50.0, 50.0), zero), Pointer::default());

    let nan = Rect {
        height: f32::NAN,
        ..rect()
    };
    assert_eq!(Pointer::from_client(Vec2::new(50.0, 50.0), nan), Pointer::default());
}

#[test]
fn non_finite_client_position_maps_to_centre_axis() {
    let p = Pointer::from_client(Vec2::new(f32::NAN, 120.0), rect());
    assert_eq!(p.x, 0.0);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn set_pointer_clamps() {
    let mut m = Motion::new(MotionParams::default());
    m.set_pointer(Pointer { x: 4.0, y: -9.0 });
    assert_eq!(m.pointer(), Pointer { x: 1.0, y: -1.0 });
}

#[test]
fn float_offset_follows_sine() {
    for t in [0.0, 250.0, 1000.0, 1047.2, 123_456.0] {
        let expected = 0.15 * (0.0015_f64 * t).sin();
        assert!((float_offset(t) as f64 - expected).abs() < 1e-6, "t = {t}");
    }
    // Peak a quarter period in.
    let quarter = std::f64::consts::FRAC_PI_2 / 0.0015;
    assert!((float_offset(quarter) - 0.15).abs() < 1e-6);
}

#[test]
fn step_spins_and_floats() {
    let mut m = Motion::new(MotionParams::default());
    let mut g = bare_group();
    m.step(&mut g, 1000.0);
    assert!((g.rotation.y - 0.004).abs() < 1e-7);
    assert!((g.position.y - float_offset(1000.0)).abs() < 1e-7);
    assert_eq!(m.ticks(), 1);
}

#[test]
fn step_applies_damped_parallax() {
    let mut m = Motion::new(MotionParams::default());
    m.set_pointer(Pointer { x: 1.0, y: 1.0 });
    let mut g = bare_group();
    m.step(&mut g, 0.0);
    // x: 0.1 + (0.3 - 0.1) * 0.05; z: 0.15 + (0.45 - 0.15) * 0.05
    assert!((g.rotation.x - 0.11).abs() < 1e-6);
    assert!((g.rotation.z - 0.165).abs() < 1e-6);
}

#[test]
fn parallax_converges_to_pointer_target() {
    let mut m = Motion::new(MotionParams::default());
    m.set_pointer(Pointer { x: -0.5, y: 0.5 });
    let mut g = bare_group();
    for i in 0..1000 {
        m.step(&mut g, i as f64 * 16.0);
    }
    assert!((g.rotation.x - 0.15).abs() < 1e-4);
    assert!((g.rotation.z - 0.0).abs() < 1e-4);
}

#[test]
fn centred_pointer_settles_at_rest_roll() {
    let mut m = Motion::new(MotionParams::default());
    let mut g = bare_group();
    g.rotation.x = 0.6;
    g.rotation.z = -0.6;
    for _ in 0..1000 {
        m.step(&mut g, 0.0);
    }
    assert!(g.rotation.x.abs() < 1e-4);
    assert!((g.rotation.z - 0.15).abs() < 1e-4);
}

#[test]
fn custom_params_are_honoured() {
    let params = MotionParams {
        spin_per_tick: 0.0,
        float_amplitude: 0.0,
        ..MotionParams::default()
    };
    let mut m = Motion::new(params);
    let mut g = bare_group();
    m.step(&mut g, 500.0);
    assert_eq!(g.rotation.y, 0.0);
    assert_eq!(g.position.y, 0.0);
}
