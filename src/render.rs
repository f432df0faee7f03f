use crate::constants::{BUMP_FORMAT, CLEAR_COLOR, DEPTH_FORMAT};
use crate::core::constants::TONE_MAPPING_EXPOSURE;
use crate::core::{Backend, InitError, RenderError, Scene};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use mesh::GpuMesh;
use targets::DepthTarget;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_color: [f32; 4],
    spot_decay: [f32; 4],
    point_pos: [f32; 4],
    point_color: [f32; 4],
    rim_dir: [f32; 4],
    rim_color: [f32; 4],
    params: [f32; 4],
}

impl FrameUniforms {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let cam = &scene.camera;
        let l = &scene.lights;
        let spot_dir = (l.key.target - l.key.position).normalize_or_zero();
        let cos_outer = l.key.angle.cos();
        let cos_inner = (l.key.angle * (1.0 - l.key.penumbra)).cos();
        Self {
            view_proj: cam.view_projection().to_cols_array_2d(),
            camera_pos: cam.eye.extend(1.0).to_array(),
            ambient: (l.ambient.color * l.ambient.intensity).extend(0.0).to_array(),
            spot_pos: l.key.position.extend(l.key.distance).to_array(),
            spot_dir: spot_dir.extend(cos_outer).to_array(),
            spot_color: (l.key.color * l.key.intensity).extend(cos_inner).to_array(),
            spot_decay: [l.key.decay, 0.0, 0.0, 0.0],
            point_pos: l.fill.position.extend(1.0).to_array(),
            point_color: (l.fill.color * l.fill.intensity).extend(0.0).to_array(),
            rim_dir: l.rim.direction().extend(0.0).to_array(),
            rim_color: (l.rim.color * l.rim.intensity).extend(0.0).to_array(),
            params: [TONE_MAPPING_EXPOSURE, 0.0, 0.0, 0.0],
        }
    }
}

/// Scene resources created by [`Backend::load`].
struct Loaded {
    frame_bind_group: wgpu::BindGroup,
    bump_tex: wgpu::Texture,
    meshes: Vec<GpuMesh>,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    frame_bgl: wgpu::BindGroupLayout,
    part_bgl: wgpu::BindGroupLayout,
    frame_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    depth: DepthTarget,
    loaded: Option<Loaded>,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, InitError> {
        if !webgpu_available() {
            return Err(InitError::Unavailable("navigator.gpu is undefined".into()));
        }
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| InitError::Surface(format!("{:?}", e)))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(InitError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| InitError::Device(format!("{:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| InitError::Surface("no surface formats".into()))?;
        // Transparent canvas so the page gradient shows through.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("product_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PRODUCT_WGSL.into()),
        });
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let part_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("part_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("product_pl"),
            bind_group_layouts: &[&frame_bgl, &part_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("product_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[mesh::vertex_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("bump_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let depth = DepthTarget::new(&device, width, height);
        log::info!("[render] webgpu ready format={:?} alpha={:?}", format, alpha_mode);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            frame_bgl,
            part_bgl,
            frame_buffer,
            sampler,
            depth,
            loaded: None,
        })
    }

    fn configure(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }
}

fn webgpu_available() -> bool {
    let global = js_sys::global();
    js_sys::Reflect::get(&global, &JsValue::from_str("navigator"))
        .and_then(|nav| js_sys::Reflect::get(&nav, &JsValue::from_str("gpu")))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

impl Backend for GpuState {
    fn load(&mut self, scene: &Scene) -> Result<(), InitError> {
        if scene.bump.texels.len() != (scene.bump.width * scene.bump.height) as usize {
            return Err(InitError::Upload("bump map size mismatch".into()));
        }
        let (bump_tex, bump_view) = helpers::upload_r8(
            &self.device,
            &self.queue,
            "bump_tex",
            scene.bump.width,
            scene.bump.height,
            &scene.bump.texels,
        );
        let frame_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &self.frame_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.frame_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&bump_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        let meshes = scene
            .product
            .parts
            .iter()
            .map(|p| GpuMesh::upload(&self.device, &self.part_bgl, p))
            .collect::<Vec<_>>();
        log::info!(
            "[render] uploaded {} meshes, bump {}x{} {:?}",
            meshes.len(),
            scene.bump.width,
            scene.bump.height,
            BUMP_FORMAT
        );
        self.loaded = Some(Loaded {
            frame_bind_group,
            bump_tex,
            meshes,
        });
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        let dpr = dom::device_pixel_ratio();
        let w_px = (width as f64 * dpr).round() as u32;
        let h_px = (height as f64 * dpr).round() as u32;
        self.configure(w_px, h_px);
    }

    fn draw(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let Some(loaded) = &self.loaded else {
            return Ok(());
        };
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::Timeout) => return Err(RenderError::Timeout),
            Err(e) => return Err(RenderError::Frame(format!("{:?}", e))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = FrameUniforms::from_scene(scene);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&uniforms));
        let group = scene.product.matrix();
        for m in &loaded.meshes {
            m.write_transform(&self.queue, group);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("product_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &loaded.frame_bind_group, &[]);
            for m in &loaded.meshes {
                rpass.set_bind_group(1, &m.bind_group, &[]);
                rpass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
                rpass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..m.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Drop for GpuState {
    fn drop(&mut self) {
        // Release GPU memory eagerly; the canvas context goes with the surface.
        if let Some(loaded) = self.loaded.take() {
            loaded.bump_tex.destroy();
            for m in &loaded.meshes {
                m.destroy();
            }
        }
        self.frame_buffer.destroy();
        self.depth.tex.destroy();
        log::info!("[render] gpu resources released");
    }
}
