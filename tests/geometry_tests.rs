// Host-side tests for the procedural product geometry and scene assembly.

use glam::Vec3;
use lipstick_core::constants::*;
use lipstick_core::*;

#[test]
fn cylinder_vertex_and_triangle_counts() {
    let g = Geometry::cylinder(1.0, 1.0, 2.0, 64);
    // wall: 2 rows of 65; each cap: 64 centres + 65 rim
    assert_eq!(g.vertex_count(), 2 * 65 + 2 * (64 + 65));
    assert_eq!(g.triangle_count(), 4 * 64);
    assert_eq!(g.normals.len(), g.vertex_count());
    assert_eq!(g.uvs.len(), g.vertex_count());
    assert!(g.indices.iter().all(|&i| (i as usize) < g.vertex_count()));
}

#[test]
fn cylinder_is_centred_on_origin() {
    let g = Geometry::cylinder(1.2, 1.2, 3.0, 32);
    let (lo, hi) = g.bounds().expect("non-empty");
    assert!((lo.y + 1.5).abs() < 1e-6);
    assert!((hi.y - 1.5).abs() < 1e-6);
    assert!((hi.x - 1.2).abs() < 1e-3);
    assert!((lo.z + 1.2).abs() < 1e-3);
}

#[test]
fn cylinder_clamps_degenerate_segment_count() {
    let g = Geometry::cylinder(1.0, 1.0, 1.0, 1);
    assert_eq!(g.triangle_count(), 4 * 3);
}

#[test]
fn wall_normals_point_outward() {
    let g = Geometry::cylinder(1.0, 1.0, 2.0, 16);
    // First 34 vertices are the wall.
    for i in 0..34 {
        let p = g.positions[i];
        let n = g.normals[i];
        let radial = Vec3::new(p.x, 0.0, p.z).normalize();
        assert!(n.dot(radial) > 0.99, "wall normal {i} not radial");
    }
}

#[test]
fn recomputed_normals_agree_with_winding() {
    let mut g = Geometry::cylinder(1.0, 1.0, 2.0, 24);
    g.compute_vertex_normals();
    for (p, n) in g.positions.iter().zip(&g.normals) {
        assert!((n.length() - 1.0).abs() < 1e-4);
        if p.y > 0.99 && p.x.abs() < 1e-6 && p.z.abs() < 1e-6 {
            assert!(n.y > 0.99, "top cap centre faces up");
        }
    }
}

#[test]
fn slant_lowers_the_positive_x_side_of_the_tip() {
    let mut g = Geometry::cylinder(BULLET_RADIUS, BULLET_RADIUS, BULLET_HEIGHT, 64);
    let top_before = g.bounds().expect("non-empty").1.y;
    g.slant_tip(&SlantTip::default());

    let top = BULLET_HEIGHT * 0.5;
    let highest_low_x = g
        .positions
        .iter()
        .filter(|p| p.x < -BULLET_RADIUS + 1e-3)
        .map(|p| p.y)
        .fold(f32::MIN, f32::max);
    let highest_high_x = g
        .positions
        .iter()
        .filter(|p| p.x > BULLET_RADIUS - 1e-3)
        .map(|p| p.y)
        .fold(f32::MIN, f32::max);

    assert!((highest_low_x - top).abs() < 1e-3);
    assert!((highest_high_x - (top - 2.0 * BULLET_RADIUS * TIP_SLOPE)).abs() < 1e-3);
    assert!(g.bounds().expect("non-empty").1.y <= top_before + 1e-6);
}

#[test]
fn slant_leaves_lower_half_untouched() {
    let untouched = Geometry::cylinder(BULLET_RADIUS, BULLET_RADIUS, BULLET_HEIGHT, 32);
    let mut g = untouched.clone();
    g.slant_tip(&SlantTip::default());
    for (a, b) in untouched.positions.iter().zip(&g.positions) {
        if a.y <= 0.0 {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn slant_crown_curve_uses_depth() {
    let tip = SlantTip {
        threshold_y: 0.0,
        pivot_x: 0.0,
        slope: 0.0,
        curve_above_y: 0.5,
        curve: 0.1,
    };
    let mut g = Geometry {
        positions: vec![Vec3::new(0.0, 1.0, 2.0), Vec3::new(0.0, 0.4, 2.0)],
        ..Geometry::default()
    };
    g.slant_tip(&tip);
    assert!((g.positions[0].y - 0.6).abs() < 1e-6);
    assert!((g.positions[1].y - 0.4).abs() < 1e-6);
}

#[test]
fn vertices_interleave_attributes() {
    let g = Geometry::cylinder(1.0, 1.0, 1.0, 8);
    let verts = g.vertices();
    assert_eq!(verts.len(), g.vertex_count());
    assert_eq!(verts[3].position, g.positions[3].to_array());
    assert_eq!(verts[3].uv, g.uvs[3].to_array());
    assert_eq!(std::mem::size_of::<Vertex>(), 32);
}

#[test]
fn scene_builds_four_parts_with_their_materials() {
    let scene = Scene::build_with(
        800,
        600,
        1,
        &SpeckleParams {
            size: 16,
            dots: 10,
            ..SpeckleParams::default()
        },
    );
    let kinds: Vec<_> = scene.product.parts.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![PartKind::Case, PartKind::Ring, PartKind::Tube, PartKind::Bullet]
    );
    let bullet = scene.product.part(PartKind::Bullet).expect("bullet");
    assert_eq!(bullet.material, Material::WAX);
    assert!(bullet.material.bump_scale > 0.0);
    assert_eq!(
        scene.product.part(PartKind::Case).expect("case").material.bump_scale,
        0.0
    );
    assert!((scene.product.rotation.x - REST_TILT_X).abs() < 1e-6);
    assert!((scene.product.rotation.z - REST_ROLL_Z).abs() < 1e-6);
    assert!((scene.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn camera_ignores_zero_viewport() {
    let mut cam = Camera::studio(400, 200);
    assert!(!cam.set_viewport(0, 100));
    assert!((cam.aspect - 2.0).abs() < 1e-6);
    assert!(cam.set_viewport(300, 300));
    assert!((cam.aspect - 1.0).abs() < 1e-6);
}

#[test]
fn rim_light_travels_toward_the_origin() {
    let lights = Lights::studio();
    let d = lights.rim.direction();
    assert!((d.length() - 1.0).abs() < 1e-6);
    assert!(d.dot(-lights.rim.position) > 0.0);
}
