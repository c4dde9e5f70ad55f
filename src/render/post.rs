use super::helpers::{self, uniform_buffer, PipelineSpec};
use crate::constants::{BLOOM_KNEE, BLOOM_RADIUS_SPREAD};
use crate::core::BloomSettings;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    threshold: f32,
    strength: f32,
    radius: f32,
    knee: f32,
    spread: f32,
    encode_srgb: f32,
    _pad: [f32; 2],
}

impl PostUniforms {
    pub(crate) fn new(
        bloom: &BloomSettings,
        resolution: [f32; 2],
        blur_dir: [f32; 2],
        encode_srgb: bool,
    ) -> Self {
        Self {
            resolution,
            blur_dir,
            threshold: bloom.threshold,
            strength: bloom.strength,
            radius: bloom.radius,
            knee: BLOOM_KNEE,
            spread: BLOOM_RADIUS_SPREAD,
            encode_srgb: if encode_srgb { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        }
    }
}

/// Pipelines, layouts and per-pass uniform buffers of the post chain.
///
/// Each pass reads its own uniform buffer so that all of them can be written
/// before the single submit of a frame.
pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) uniforms_main: wgpu::Buffer,
    pub(crate) uniforms_blur_h: wgpu::Buffer,
    pub(crate) uniforms_blur_v: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) output_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    bloom_format: wgpu::TextureFormat,
    output_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
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
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_output = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_output"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::make_pipeline(
        device,
        PipelineSpec::fullscreen("bright_pipeline", &pl_single, &shader, "fs_bright", bloom_format),
    );
    let blur_pipeline = helpers::make_pipeline(
        device,
        PipelineSpec::fullscreen("blur_pipeline", &pl_single, &shader, "fs_blur", bloom_format),
    );
    let output_pipeline = helpers::make_pipeline(
        device,
        PipelineSpec::fullscreen("output_pipeline", &pl_output, &shader, "fs_output", output_format),
    );

    PostResources {
        uniforms_main: uniform_buffer::<PostUniforms>(device, "post_uniforms_main"),
        uniforms_blur_h: uniform_buffer::<PostUniforms>(device, "post_uniforms_blur_h"),
        uniforms_blur_v: uniform_buffer::<PostUniforms>(device, "post_uniforms_blur_v"),
        bgl0,
        bgl1,
        bright_pipeline,
        blur_pipeline,
        output_pipeline,
    }
}

pub(crate) fn create_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    hdr_view: &wgpu::TextureView,
    bloom_a_view: &wgpu::TextureView,
    bloom_b_view: &wgpu::TextureView,
) -> PostBindGroups {
    PostBindGroups {
        hdr: helpers::texture_bind_group(
            device,
            "bg_hdr",
            &post.bgl0,
            hdr_view,
            sampler,
            Some(&post.uniforms_main),
        ),
        from_bloom_a: helpers::texture_bind_group(
            device,
            "bg_from_bloom_a",
            &post.bgl0,
            bloom_a_view,
            sampler,
            Some(&post.uniforms_blur_h),
        ),
        from_bloom_b: helpers::texture_bind_group(
            device,
            "bg_from_bloom_b",
            &post.bgl0,
            bloom_b_view,
            sampler,
            Some(&post.uniforms_blur_v),
        ),
        bloom_a_only: helpers::texture_bind_group(
            device,
            "bg_bloom_a_only",
            &post.bgl1,
            bloom_a_view,
            sampler,
            None,
        ),
    }
}

pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    bloom: &BloomSettings,
    bloom_res: [f32; 2],
    encode_srgb: bool,
) {
    let main = PostUniforms::new(bloom, bloom_res, [0.0, 0.0], encode_srgb);
    let h = PostUniforms::new(bloom, bloom_res, [1.0, 0.0], encode_srgb);
    let v = PostUniforms::new(bloom, bloom_res, [0.0, 1.0], encode_srgb);
    queue.write_buffer(&post.uniforms_main, 0, bytemuck::bytes_of(&main));
    queue.write_buffer(&post.uniforms_blur_h, 0, bytemuck::bytes_of(&h));
    queue.write_buffer(&post.uniforms_blur_v, 0, bytemuck::bytes_of(&v));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
