use crate::camera::Camera;
use crate::core::constants::DISPLACEMENT_DIVISOR;
use crate::core::{BloomSettings, FrameOutput, MeshShape};
use glam::{EulerRot, Mat4, Vec3};
use web_sys as web;

mod helpers;
pub mod plan;
mod post;
mod scene;
mod targets;

use plan::{PassKind, PassLoad, PassTarget, TargetSizes};
use post::{PostBindGroups, PostResources};
use scene::{SceneResources, SceneUniforms};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    threshold: f32,
    strength: f32,
    radius: f32,
    _pad: f32,
}

/// What the frame loop should do after a failed surface acquire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRecovery {
    /// Reconfigure the surface, then skip this frame.
    Reconfigure,
    /// Skip this frame and try again on the next tick.
    Skip,
}

impl SurfaceRecovery {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigure,
            _ => Self::Skip,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    bind_groups: PostBindGroups,

    sizes: TargetSizes,
    rotation: Vec3,
    time: f32,
    frequency: f32,
    color: [f32; 3],
    bloom: BloomSettings,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        shape: MeshShape,
        color: [f32; 3],
        bloom: BloomSettings,
    ) -> anyhow::Result<Self> {
        let sizes = TargetSizes::for_surface(canvas.width().max(1), canvas.height().max(1))
            .ok_or_else(|| anyhow::anyhow!("canvas has no area"))?;
        let (width, height) = sizes.scene;

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
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
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: page content shows through wherever the mesh is absent
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
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
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, &sizes);
        let scene = scene::create_scene_resources(&device, targets::HDR_FORMAT, shape);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, targets::BLOOM_FORMAT, format);
        let bind_groups = post::build_bind_groups(&device, &post, &linear_sampler, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            linear_sampler,
            post,
            bind_groups,
            sizes,
            rotation: Vec3::ZERO,
            time: 0.0,
            frequency: 0.0,
            color,
            bloom,
        })
    }

    /// Take this tick's rotation and shader inputs from the integrator.
    pub fn set_frame(&mut self, frame: &FrameOutput) {
        self.rotation = frame.rotation;
        self.time = frame.uniforms.time;
        self.frequency = frame.uniforms.frequency;
    }

    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = color;
    }

    pub fn set_bloom(&mut self, bloom: BloomSettings) {
        self.bloom = bloom;
    }

    pub fn set_shape(&mut self, shape: MeshShape) {
        if self.scene.reshape(&self.device, shape) {
            log::info!(
                "[gpu] mesh rebuilt radius={:.2} detail={} vertices={}",
                shape.radius,
                shape.detail,
                self.scene.vertex_count
            );
        }
    }

    /// Current offscreen target sizes.
    pub fn target_sizes(&self) -> TargetSizes {
        self.targets.allocated()
    }

    /// Resize the surface and both passes' offscreen targets; returns whether
    /// anything changed. Zero-area viewports are ignored.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) -> bool {
        let Some(sizes) = TargetSizes::for_surface(width, height) else {
            return false;
        };
        if sizes == self.sizes {
            return false;
        }
        self.sizes = sizes;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        // Recreate offscreen render targets and the bind groups that view them
        self.targets.recreate(&self.device, &sizes);
        self.bind_groups =
            post::build_bind_groups(&self.device, &self.post, &self.linear_sampler, &self.targets);
        let allocated = self.target_sizes();
        log::debug!(
            "[gpu] resized to {}x{}, bloom {}x{}",
            width,
            height,
            allocated.bloom.0,
            allocated.bloom.1
        );
        true
    }

    /// Handle a failed acquire. The frame is dropped either way.
    pub fn recover(&mut self, err: &wgpu::SurfaceError) -> SurfaceRecovery {
        let action = SurfaceRecovery::for_error(err);
        if action == SurfaceRecovery::Reconfigure {
            self.surface.configure(&self.device, &self.config);
        }
        action
    }

    fn write_uniforms(&self, camera: &Camera) {
        let model = Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        let u = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            time: self.time,
            frequency: self.frequency,
            displacement_divisor: DISPLACEMENT_DIVISOR,
            _pad: 0.0,
            color: [self.color[0], self.color[1], self.color[2], 1.0],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let p = &self.post;
        // Blur taps step one texel of the texture being sampled
        let scene = self.sizes.of(PassTarget::SceneHdr);
        let blur_h_src = self.sizes.of(PassTarget::BloomA);
        let blur_v_src = self.sizes.of(PassTarget::BloomB);
        post::write_post_uniforms(&self.queue, &p.main_uniforms, scene, [0.0, 0.0], &self.bloom);
        post::write_post_uniforms(&self.queue, &p.blur_h_uniforms, blur_h_src, [1.0, 0.0], &self.bloom);
        post::write_post_uniforms(&self.queue, &p.blur_v_uniforms, blur_v_src, [0.0, 1.0], &self.bloom);
    }

    pub fn render(&mut self, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.write_uniforms(camera);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        for pass in plan::frame_passes() {
            let target = match pass.target {
                PassTarget::SceneHdr => &self.targets.hdr_view,
                PassTarget::BloomA => &self.targets.bloom_a_view,
                PassTarget::BloomB => &self.targets.bloom_b_view,
                PassTarget::Surface => &view,
            };
            let load = match pass.load {
                PassLoad::Clear => wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                PassLoad::Load => wgpu::LoadOp::Load,
            };
            let (pipeline, bg) = match pass.kind {
                PassKind::Mesh => {
                    self.scene.draw(&mut encoder, pass.label, target, load);
                    continue;
                }
                PassKind::Copy => (&self.post.copy_pipeline, &self.bind_groups.scene),
                PassKind::Bright => (&self.post.bright_pipeline, &self.bind_groups.scene),
                PassKind::BlurHorizontal => (&self.post.blur_pipeline, &self.bind_groups.blur_h),
                PassKind::BlurVertical => (&self.post.blur_pipeline, &self.bind_groups.blur_v),
                PassKind::BloomComposite => (&self.post.bloom_pipeline, &self.bind_groups.bloom),
            };
            post::blit(&mut encoder, pass.label, target, load, pipeline, bg);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
