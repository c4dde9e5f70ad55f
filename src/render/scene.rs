use super::helpers::{make_pipeline, uniform_buffer, PipelineSpec};
use crate::core::{CubeMesh, MeshVertex, ShaderUniforms, CUBE_SIDE};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) time: f32,
    pub(crate) frequency: f32,
    pub(crate) _pad: [f32; 2],
}

impl SceneUniforms {
    pub(crate) fn new(view_proj: Mat4, model: Mat4, u: &ShaderUniforms) -> Self {
        let [r, g, b] = u.color();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [r, g, b, 1.0],
            time: u.time,
            frequency: u.frequency,
            _pad: [0.0; 2],
        }
    }
}

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
    let pipeline = make_pipeline(
        device,
        PipelineSpec {
            label: "scene_pipeline",
            layout: &pl,
            shader: &shader,
            vs_entry: "vs_main",
            fs_entry: "fs_main",
            buffers: &[vertex_layout],
            topology: wgpu::PrimitiveTopology::LineList,
            format: hdr_format,
        },
    );

    let mesh = CubeMesh::new(CUBE_SIDE);
    log::info!(
        "[gpu] cube mesh: {} vertices, {} edges",
        mesh.vertices.len(),
        mesh.edge_count()
    );
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_ib"),
        contents: bytemuck::cast_slice(&mesh.line_indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniforms = uniform_buffer::<SceneUniforms>(device, "scene_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniforms.as_entire_binding(),
        }],
    });

    SceneResources {
        pipeline,
        index_count: mesh.line_indices.len() as u32,
        vertex_buffer,
        index_buffer,
        uniform_buffer: uniforms,
        bind_group,
    }
}
