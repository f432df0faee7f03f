//! Scene description for the product render.
//!
//! These types avoid platform-specific APIs. The web renderer uploads the
//! meshes once and reads the camera, lights and group transform every frame.

use crate::constants::*;
use crate::geometry::{Geometry, SlantTip};
use crate::texture::{BumpMap, SpeckleParams};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Studio camera framing the product, slightly above centre.
    pub fn studio(width: u32, height: u32) -> Self {
        let mut cam = Self {
            eye: CAMERA_EYE,
            target: Vec3::new(0.0, CAMERA_EYE.y, 0.0),
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        cam.set_viewport(width, height);
        cam
    }

    /// Match the aspect ratio to a viewport. Zero-sized viewports are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// `0xRRGGBB` to linear-ish RGB in `[0, 1]`.
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct SpotLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    /// Half-angle of the cone in radians.
    pub angle: f32,
    /// Fraction of the cone over which the edge fades, `[0, 1]`.
    pub penumbra: f32,
    pub decay: f32,
    /// Cut-off range; 0 means unlimited.
    pub distance: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

/// Light travelling from `position` toward the origin.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// Studio lighting: soft ambient, key spot, pink fill and a cool rim.
#[derive(Clone, Copy, Debug)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub key: SpotLight,
    pub fill: PointLight,
    pub rim: DirectionalLight,
}

impl Lights {
    pub fn studio() -> Self {
        Self {
            ambient: AmbientLight {
                color: rgb(0xffffff),
                intensity: 0.4,
            },
            key: SpotLight {
                color: rgb(0xffffff),
                intensity: 2.0,
                position: Vec3::new(5.0, 8.0, 8.0),
                target: Vec3::ZERO,
                angle: std::f32::consts::PI / 6.0,
                penumbra: 0.2,
                decay: 2.0,
                distance: 50.0,
            },
            fill: PointLight {
                color: rgb(0xffc0cb),
                intensity: 0.8,
                position: Vec3::new(-6.0, 2.0, 6.0),
            },
            rim: DirectionalLight {
                color: rgb(0xeef2ff),
                intensity: 1.0,
                position: Vec3::new(0.0, 5.0, -5.0),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    /// Height scale of the shared bump map; 0 disables it.
    pub bump_scale: f32,
}

impl Material {
    pub const ROSE_GOLD: Material = Material {
        color: Vec3::new(0xe6 as f32 / 255.0, 0xc6 as f32 / 255.0, 0xc0 as f32 / 255.0),
        metalness: 0.6,
        roughness: 0.25,
        clearcoat: 1.0,
        bump_scale: 0.0,
    };
    pub const GOLD: Material = Material {
        color: Vec3::new(1.0, 0xd7 as f32 / 255.0, 0.0),
        metalness: 1.0,
        roughness: 0.15,
        clearcoat: 1.0,
        bump_scale: 0.0,
    };
    pub const CHROME: Material = Material {
        color: Vec3::ONE,
        metalness: 0.9,
        roughness: 0.2,
        clearcoat: 0.0,
        bump_scale: 0.0,
    };
    pub const WAX: Material = Material {
        color: Vec3::new(0xfb as f32 / 255.0, 0x6f as f32 / 255.0, 0x92 as f32 / 255.0),
        metalness: 0.0,
        roughness: 0.45,
        clearcoat: 0.0,
        bump_scale: BULLET_BUMP_SCALE,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartKind {
    Case,
    Ring,
    Tube,
    Bullet,
}

#[derive(Clone, Debug)]
pub struct Part {
    pub kind: PartKind,
    pub geometry: Geometry,
    pub material: Material,
    /// Vertical offset inside the group.
    pub offset_y: f32,
}

impl Part {
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.offset_y, 0.0))
    }
}

/// Transform shared by every part of the product.
#[derive(Clone, Debug)]
pub struct Group {
    pub parts: Vec<Part>,
    /// Euler angles applied in X, Y, Z order.
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Group {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }

    pub fn part(&self, kind: PartKind) -> Option<&Part> {
        self.parts.iter().find(|p| p.kind == kind)
    }
}

/// Everything one mount of the product render owns.
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Lights,
    pub product: Group,
    pub bump: BumpMap,
}

impl Scene {
    /// Build camera, lights, lipstick meshes and a fresh bump map.
    pub fn build(width: u32, height: u32, seed: u64) -> Self {
        Self::build_with(width, height, seed, &SpeckleParams::default())
    }

    pub fn build_with(width: u32, height: u32, seed: u64, speckle: &SpeckleParams) -> Self {
        Self {
            camera: Camera::studio(width, height),
            lights: Lights::studio(),
            product: build_lipstick(),
            bump: BumpMap::speckle(speckle, seed),
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        self.camera.set_viewport(width, height)
    }
}

fn straight(radius: f32, height: f32) -> Geometry {
    Geometry::cylinder(radius, radius, height, RADIAL_SEGMENTS)
}

fn build_lipstick() -> Group {
    let mut bullet = straight(BULLET_RADIUS, BULLET_HEIGHT);
    bullet.slant_tip(&SlantTip::default());
    bullet.compute_vertex_normals();

    let parts = vec![
        Part {
            kind: PartKind::Case,
            geometry: straight(CASE_RADIUS, CASE_HEIGHT),
            material: Material::ROSE_GOLD,
            offset_y: CASE_Y,
        },
        Part {
            kind: PartKind::Ring,
            geometry: straight(RING_RADIUS, RING_HEIGHT),
            material: Material::GOLD,
            offset_y: RING_Y,
        },
        Part {
            kind: PartKind::Tube,
            geometry: straight(TUBE_RADIUS, TUBE_HEIGHT),
            material: Material::CHROME,
            offset_y: TUBE_Y,
        },
        Part {
            kind: PartKind::Bullet,
            geometry: bullet,
            material: Material::WAX,
            offset_y: BULLET_Y,
        },
    ];

    Group {
        parts,
        rotation: Vec3::new(REST_TILT_X, 0.0, REST_ROLL_Z),
        position: Vec3::ZERO,
    }
}
