use super::helpers;
use super::targets::RenderTargets;
use super::PostUniforms;
use crate::core::BloomSettings;
use wgpu;

pub(crate) struct PostResources {
    pub(crate) bgl: wgpu::BindGroupLayout, // tex+sampler+uniform
    // One uniform buffer per distinct parameter set so every pass in a frame
    // sees its own values after the single submit.
    pub(crate) main_uniforms: wgpu::Buffer,
    pub(crate) blur_h_uniforms: wgpu::Buffer,
    pub(crate) blur_v_uniforms: wgpu::Buffer,
    pub(crate) copy_pipeline: wgpu::RenderPipeline,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) bloom_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) scene: wgpu::BindGroup,
    pub(crate) blur_h: wgpu::BindGroup,
    pub(crate) blur_v: wgpu::BindGroup,
    pub(crate) bloom: wgpu::BindGroup,
}

fn uniform_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<PostUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let copy_pipeline = helpers::make_post_pipeline(
        device,
        "copy_pipeline",
        &layout,
        post_shader,
        "fs_copy",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        "bright_pipeline",
        &layout,
        post_shader,
        "fs_bright",
        bloom_format,
        None,
    );
    let blur_pipeline = helpers::make_post_pipeline(
        device,
        "blur_pipeline",
        &layout,
        post_shader,
        "fs_blur",
        bloom_format,
        None,
    );
    let bloom_pipeline = helpers::make_post_pipeline(
        device,
        "bloom_pipeline",
        &layout,
        post_shader,
        "fs_bloom",
        swap_format,
        Some(helpers::ADDITIVE_BLEND),
    );

    PostResources {
        bgl,
        main_uniforms: uniform_buffer(device, "post_uniforms_main"),
        blur_h_uniforms: uniform_buffer(device, "post_uniforms_blur_h"),
        blur_v_uniforms: uniform_buffer(device, "post_uniforms_blur_v"),
        copy_pipeline,
        bright_pipeline,
        blur_pipeline,
        bloom_pipeline,
    }
}

fn bind(
    device: &wgpu::Device,
    label: &str,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    view: &wgpu::TextureView,
    uniforms: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: &post.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniforms.as_entire_binding(),
            },
        ],
    })
}

/// Bind groups reference target views, so they are rebuilt with the targets.
pub(crate) fn build_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    PostBindGroups {
        scene: bind(
            device,
            "bg_scene",
            post,
            sampler,
            &targets.hdr_view,
            &post.main_uniforms,
        ),
        blur_h: bind(
            device,
            "bg_blur_h",
            post,
            sampler,
            &targets.bloom_a_view,
            &post.blur_h_uniforms,
        ),
        blur_v: bind(
            device,
            "bg_blur_v",
            post,
            sampler,
            &targets.bloom_b_view,
            &post.blur_v_uniforms,
        ),
        bloom: bind(
            device,
            "bg_bloom",
            post,
            sampler,
            &targets.bloom_a_view,
            &post.main_uniforms,
        ),
    }
}

pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    resolution: (u32, u32),
    blur_dir: [f32; 2],
    bloom: &BloomSettings,
) {
    let pu = PostUniforms {
        resolution: [resolution.0 as f32, resolution.1 as f32],
        blur_dir,
        threshold: bloom.threshold,
        strength: bloom.strength,
        radius: bloom.radius,
        _pad: 0.0,
    };
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&pu));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    load: wgpu::LoadOp<wgpu::Color>,
    pipeline: &wgpu::RenderPipeline,
    bg: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg, &[]);
    r.draw(0..3, 0..1);
    drop(r);
}
