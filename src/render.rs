use crate::constants::{CLEAR_COLOR, HDR_FORMAT};
use crate::core::{AppState, Viewport};
use web_sys as web;

mod helpers;
mod post;
mod scene;
mod targets;

use post::{PostBindGroups, PostResources};
use scene::{SceneResources, SceneUniforms};
use targets::RenderTargets;

/// WebGPU renderer: base scene pass into an HDR target, bloom (bright pass +
/// separable blur at half resolution), then an output pass that adds the
/// bloom and encodes sRGB onto the canvas surface.
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
    // Surface format lacks hardware sRGB encoding; the output pass does it
    encode_srgb: bool,
    viewport: Viewport,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, viewport: Viewport) -> anyhow::Result<Self> {
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
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {:?} {}x{} (shader sRGB encode: {})",
            format,
            viewport.width,
            viewport.height,
            !format.is_srgb()
        );

        let scene = scene::create_scene_resources(&device, HDR_FORMAT);
        let targets = RenderTargets::new(&device, viewport);
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
        let post = post::create_post_resources(&device, HDR_FORMAT, format);
        let bind_groups = post::create_bind_groups(
            &device,
            &post,
            &linear_sampler,
            &targets.hdr_view,
            &targets.bloom_a_view,
            &targets.bloom_b_view,
        );

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
            encode_srgb: !format.is_srgb(),
            viewport,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    /// Resize the surface and every offscreen target. Takes effect on the
    /// next `render`.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.config.width = viewport.width;
        self.config.height = viewport.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, viewport);
        self.bind_groups = post::create_bind_groups(
            &self.device,
            &self.post,
            &self.linear_sampler,
            &self.targets.hdr_view,
            &self.targets.bloom_a_view,
            &self.targets.bloom_b_view,
        );
    }

    /// Reconfigure after the surface was lost or went out of date.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, state: &AppState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let su = SceneUniforms::new(state.camera.view_proj(), state.model_matrix(), &state.uniforms);
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&su));
        let (bw, bh) = self.viewport.bloom_extent();
        post::write_post_uniforms(
            &self.queue,
            &self.post,
            &state.bloom,
            [bw as f32, bh as f32],
            self.encode_srgb,
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: base scene -> hdr
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.scene.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.scene.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.scene.index_count, 0, 0..1);
        }

        // Pass 2: bright pass hdr -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.bind_groups.hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_b,
            None,
        );
        // Pass 5: output hdr + bloom_a -> swapchain
        post::blit(
            &mut encoder,
            "output",
            &view,
            &self.post.output_pipeline,
            &self.bind_groups.hdr,
            Some(&self.bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
