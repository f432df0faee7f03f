//! Mount/tick/unmount of the product render.
//!
//! The component owns its scene and backend outright; the host environment
//! is reached only through [`Stage`], and the GPU only through [`Backend`].
//! Both seams have browser implementations in the web crate and counting
//! mocks in the tests.

use crate::error::{InitError, RenderError};
use crate::motion::{Motion, MotionParams, Pointer, Rect};
use crate::scene::Scene;
use glam::Vec2;

/// Opaque id of a scheduled animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host environment of one mounted render.
pub trait Stage {
    /// Current container size in CSS pixels.
    fn container_size(&self) -> (u32, u32);
    /// Current container rectangle in client space.
    fn container_rect(&self) -> Rect;
    /// Milliseconds on the clock driving the float animation.
    fn now_ms(&self) -> f64;

    fn set_loading(&mut self, visible: bool);
    fn attach_surface(&mut self, width: u32, height: u32);
    fn resize_surface(&mut self, width: u32, height: u32);
    fn detach_surface(&mut self);

    /// Start delivering pointer-move and resize events.
    fn listen(&mut self);
    fn unlisten(&mut self);

    /// Schedule the next tick. `None` when the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// GPU side of the render. Dropping it releases every resource it owns.
pub trait Backend {
    fn load(&mut self, scene: &Scene) -> Result<(), InitError>;
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

struct Live<B> {
    backend: B,
    scene: Scene,
    motion: Motion,
}

pub struct ProductRender<S: Stage, B: Backend> {
    stage: S,
    live: Option<Live<B>>,
    pending: Option<FrameHandle>,
}

impl<S: Stage, B: Backend> ProductRender<S, B> {
    /// Mount with the default motion tuning.
    pub fn mount(stage: S, backend: Result<B, InitError>, seed: u64) -> Self {
        Self::mount_with(stage, backend, seed, MotionParams::default())
    }

    pub fn mount_with(
        mut stage: S,
        backend: Result<B, InitError>,
        seed: u64,
        params: MotionParams,
    ) -> Self {
        stage.set_loading(true);

        let mut backend = match backend {
            Ok(b) => b,
            Err(e) => {
                log::error!("[mount] backend init failed: {}", e);
                return Self::stalled(stage);
            }
        };

        let (width, height) = stage.container_size();
        let scene = Scene::build(width, height, seed);
        if let Err(e) = backend.load(&scene) {
            log::error!("[mount] scene upload failed: {}", e);
            return Self::stalled(stage);
        }

        stage.set_loading(false);
        stage.attach_surface(width, height);
        backend.resize(width, height);
        stage.listen();
        let pending = stage.request_frame();
        log::info!(
            "[mount] ready {}x{} parts={} seed={:#x}",
            width,
            height,
            scene.product.parts.len(),
            seed
        );

        Self {
            stage,
            live: Some(Live {
                backend,
                scene,
                motion: Motion::new(params),
            }),
            pending,
        }
    }

    fn stalled(stage: S) -> Self {
        Self {
            stage,
            live: None,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.live.is_some() {
            Phase::Ready
        } else {
            Phase::Loading
        }
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.live.as_ref().map(|l| &l.scene)
    }

    pub fn pointer(&self) -> Option<Pointer> {
        self.live.as_ref().map(|l| l.motion.pointer())
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Animation frame callback. The handle that fired is spent; the next
    /// one is requested before drawing.
    pub fn on_frame(&mut self) {
        self.pending = None;
        let Some(live) = self.live.as_mut() else {
            return;
        };
        self.pending = self.stage.request_frame();

        let now = self.stage.now_ms();
        live.motion.step(&mut live.scene.product, now);
        if let Err(e) = live.backend.draw(&live.scene) {
            log::warn!("[render] frame skipped: {}", e);
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        let rect = self.stage.container_rect();
        if let Some(live) = self.live.as_mut() {
            live.motion
                .set_pointer(Pointer::from_client(Vec2::new(client_x, client_y), rect));
        }
    }

    pub fn on_resize(&mut self) {
        let (width, height) = self.stage.container_size();
        let Some(live) = self.live.as_mut() else {
            return;
        };
        if !live.scene.set_viewport(width, height) {
            return;
        }
        self.stage.resize_surface(width, height);
        live.backend.resize(width, height);
    }

    /// Tear down and hand the stage back.
    ///
    /// The pending frame is cancelled, listeners are removed, the surface is
    /// detached and the scene and backend are dropped here.
    pub fn unmount(mut self) -> S {
        if let Some(handle) = self.pending.take() {
            self.stage.cancel_frame(handle);
        }
        if let Some(live) = self.live.take() {
            self.stage.unlisten();
            self.stage.detach_surface();
            log::info!("[mount] released after {} ticks", live.motion.ticks());
            drop(live);
        }
        self.stage
    }
}
