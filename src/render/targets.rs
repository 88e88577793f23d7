use super::helpers;
use super::plan::TargetSizes;
use wgpu;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const BLOOM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen color targets for the render pipeline.
///
/// - `hdr_*` holds the mesh pass in Rgba16Float at surface resolution; the
///   base pass copies it out and the bright pass reads it.
/// - `bloom_*` are half-res ping-pong buffers for bright-pass and blur.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, sizes: &TargetSizes) -> Self {
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", sizes.scene, HDR_FORMAT);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", sizes.bloom, BLOOM_FORMAT);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", sizes.bloom, BLOOM_FORMAT);
        Self {
            hdr_tex,
            hdr_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, sizes: &TargetSizes) {
        *self = Self::new(device, sizes);
    }

    /// Sizes the textures were actually allocated with.
    pub(crate) fn allocated(&self) -> TargetSizes {
        let bloom_b = (self.bloom_b.width(), self.bloom_b.height());
        debug_assert_eq!(bloom_b, (self.bloom_a.width(), self.bloom_a.height()));
        TargetSizes {
            scene: (self.hdr_tex.width(), self.hdr_tex.height()),
            bloom: bloom_b,
        }
    }
}
