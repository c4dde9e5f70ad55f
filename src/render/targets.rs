use super::helpers::create_target;
use crate::core::Viewport;

/// Offscreen color targets for the render pipeline.
///
/// - `hdr_*` hold the scene pass at full size.
/// - `bloom_*` are half-res ping-pong buffers for the bright pass and blur.
pub(crate) struct RenderTargets {
    hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, viewport: Viewport) -> Self {
        let (hdr_tex, hdr_view) =
            create_target(device, "hdr_tex", (viewport.width, viewport.height));
        let half = viewport.bloom_extent();
        let (bloom_a, bloom_a_view) = create_target(device, "bloom_a", half);
        let (bloom_b, bloom_b_view) = create_target(device, "bloom_b", half);
        Self {
            hdr_tex,
            hdr_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
        }
    }

    /// Drop the old textures and allocate new ones for `viewport`. Bind
    /// groups referencing the old views must be rebuilt afterwards.
    pub(crate) fn recreate(&mut self, device: &wgpu::Device, viewport: Viewport) {
        for tex in [&self.hdr_tex, &self.bloom_a, &self.bloom_b] {
            tex.destroy();
        }
        *self = Self::new(device, viewport);
    }
}
