//! Procedural solids of revolution and the bullet-tip deformation.
//!
//! Geometry is kept as separate attribute arrays (positions, normals, uvs)
//! plus a triangle index list, and packed into interleaved [`Vertex`]
//! records only when uploaded to the GPU.

use crate::constants::{
    BULLET_RADIUS, TIP_CURVE, TIP_CURVE_ABOVE_Y, TIP_SLOPE, TIP_THRESHOLD_Y,
};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Interleaved vertex layout consumed by the product shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Capped cylinder (or frustum) centred on the origin along +Y.
    ///
    /// The side wall uses `radial_segments + 1` columns so the seam carries
    /// its own uv coordinates. Caps get their own vertices, keeping a hard
    /// edge at the rim once normals are recomputed.
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        let segments = radial_segments.max(3);
        let mut g = Geometry::default();
        g.push_wall(radius_top, radius_bottom, height, segments);
        g.push_cap(true, radius_top, height, segments);
        g.push_cap(false, radius_bottom, height, segments);
        g
    }

    fn push_wall(&mut self, radius_top: f32, radius_bottom: f32, height: f32, segments: u32) {
        let half = height * 0.5;
        let slope = (radius_bottom - radius_top) / height;
        let start = self.positions.len() as u32;
        let columns = segments + 1;

        for row in 0..=1u32 {
            let v = row as f32;
            let radius = v * (radius_bottom - radius_top) + radius_top;
            for col in 0..columns {
                let u = col as f32 / segments as f32;
                let (sin, cos) = (u * TAU).sin_cos();
                self.positions
                    .push(Vec3::new(radius * sin, -v * height + half, radius * cos));
                self.normals.push(Vec3::new(sin, slope, cos).normalize());
                self.uvs.push(Vec2::new(u, 1.0 - v));
            }
        }

        for col in 0..segments {
            let a = start + col;
            let b = start + columns + col;
            let c = start + columns + col + 1;
            let d = start + col + 1;
            self.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    fn push_cap(&mut self, top: bool, radius: f32, height: f32, segments: u32) {
        let sign = if top { 1.0 } else { -1.0 };
        let y = height * 0.5 * sign;
        let normal = Vec3::new(0.0, sign, 0.0);

        let centers = self.positions.len() as u32;
        for _ in 0..segments {
            self.positions.push(Vec3::new(0.0, y, 0.0));
            self.normals.push(normal);
            self.uvs.push(Vec2::splat(0.5));
        }

        let rim = self.positions.len() as u32;
        for col in 0..=segments {
            let u = col as f32 / segments as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            self.positions.push(Vec3::new(radius * sin, y, radius * cos));
            self.normals.push(normal);
            self.uvs
                .push(Vec2::new(cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5));
        }

        for col in 0..segments {
            let c = centers + col;
            let i = rim + col;
            if top {
                self.indices.extend_from_slice(&[i, i + 1, c]);
            } else {
                self.indices.extend_from_slice(&[i + 1, i, c]);
            }
        }
    }

    /// Shear every vertex above the threshold into a slanted tip.
    ///
    /// Only positions change; call [`Geometry::compute_vertex_normals`]
    /// afterwards so shading follows the new surface.
    pub fn slant_tip(&mut self, tip: &SlantTip) {
        for p in &mut self.positions {
            if p.y > tip.threshold_y {
                p.y -= (p.x + tip.pivot_x) * tip.slope;
                if p.y > tip.curve_above_y {
                    p.y -= p.z * p.z * tip.curve;
                }
            }
        }
    }

    /// Area-weighted smooth normals over the index list.
    pub fn compute_vertex_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (a, b, c) = (self.positions[ia], self.positions[ib], self.positions[ic]);
            let face = (c - b).cross(a - b);
            acc[ia] += face;
            acc[ib] += face;
            acc[ic] += face;
        }
        self.normals = acc.into_iter().map(|n| n.normalize_or_zero()).collect();
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`; `None` for an empty geometry.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}

/// Parameters of the bullet-tip shear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlantTip {
    /// Vertices at or below this height are left alone.
    pub threshold_y: f32,
    /// Added to x before scaling by `slope`; the bullet radius puts the low
    /// edge of the slant on the -X side.
    pub pivot_x: f32,
    pub slope: f32,
    /// Height above which the quadratic crown correction applies.
    pub curve_above_y: f32,
    pub curve: f32,
}

impl Default for SlantTip {
    fn default() -> Self {
        Self {
            threshold_y: TIP_THRESHOLD_Y,
            pivot_x: BULLET_RADIUS,
            slope: TIP_SLOPE,
            curve_above_y: TIP_CURVE_ABOVE_Y,
            curve: TIP_CURVE,
        }
    }
}
