//! Speckled bump map that gives the bullet a waxy surface.

use crate::constants::{SPECKLE_DOTS, SPECKLE_MAX_OPACITY, SPECKLE_MAX_RADIUS, SPECKLE_SIZE};
use rand::prelude::*;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeckleParams {
    pub size: u32,
    pub dots: u32,
    pub max_opacity: f32,
    pub max_radius: f32,
}

impl Default for SpeckleParams {
    fn default() -> Self {
        Self {
            size: SPECKLE_SIZE,
            dots: SPECKLE_DOTS,
            max_opacity: SPECKLE_MAX_OPACITY,
            max_radius: SPECKLE_MAX_RADIUS,
        }
    }
}

/// Single-channel height texture, row-major, one byte per texel.
#[derive(Clone, Debug, PartialEq)]
pub struct BumpMap {
    pub width: u32,
    pub height: u32,
    pub texels: Vec<u8>,
}

impl BumpMap {
    /// White canvas covered with faint dark dots from a seeded generator.
    ///
    /// Per dot the generator yields opacity, centre x, centre y and radius in
    /// that order, so a seed fully determines the result.
    pub fn speckle(params: &SpeckleParams, seed: u64) -> Self {
        let size = params.size.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut lum = vec![1.0_f32; (size * size) as usize];

        for _ in 0..params.dots {
            let opacity = rng.gen::<f32>() * params.max_opacity;
            let cx = rng.gen::<f32>() * size as f32;
            let cy = rng.gen::<f32>() * size as f32;
            let radius = rng.gen::<f32>() * params.max_radius;
            stamp_dot(&mut lum, size, cx, cy, radius, opacity);
        }

        let texels = lum
            .iter()
            .map(|l| (l.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        Self {
            width: size,
            height: size,
            texels,
        }
    }

    pub fn texel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.texels.get((y * self.width + x) as usize).copied()
    }

    /// Mean texel value in `[0, 1]`.
    pub fn mean(&self) -> f32 {
        if self.texels.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.texels.iter().map(|t| *t as u64).sum();
        sum as f32 / (self.texels.len() as f32 * 255.0)
    }
}

// Darkens texels under an anti-aliased disc. Sub-pixel discs are weighted by
// their area so they never paint more than they cover.
fn stamp_dot(lum: &mut [f32], size: u32, cx: f32, cy: f32, radius: f32, opacity: f32) {
    if opacity <= 0.0 || radius <= 0.0 {
        return;
    }
    let area = (PI * radius * radius).min(1.0);
    let reach = radius + 0.5;
    let x0 = (cx - reach).floor().max(0.0) as u32;
    let y0 = (cy - reach).floor().max(0.0) as u32;
    let x1 = ((cx + reach).ceil() as u32).min(size - 1);
    let y1 = ((cy + reach).ceil() as u32).min(size - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let coverage = (reach - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0) * area;
            if coverage > 0.0 {
                let texel = &mut lum[(y * size + x) as usize];
                *texel *= 1.0 - opacity * coverage;
            }
        }
    }
}
