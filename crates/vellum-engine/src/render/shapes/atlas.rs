use std::collections::HashMap;

use fontdue::layout::GlyphRasterConfig;

use crate::render::RenderCtx;

pub(super) const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1;

/// Normalized atlas rectangle of one glyph bitmap (row 0 = bitmap top).
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct AtlasRegion {
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

/// Row-by-row ("shelf") rectangle packer.
///
/// Rectangles fill a row left to right; a rectangle that does not fit starts
/// a new row below the tallest one so far. Once a rectangle does not fit
/// vertically the packer reports full and refuses everything after.
#[derive(Debug)]
pub(super) struct ShelfPacker {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    pub(super) fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    /// Top-left corner for a `w × h` rectangle.
    pub(super) fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }
        if self.cursor_x + w + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }
        if self.cursor_x + w + self.padding > self.size
            || self.cursor_y + h + self.padding > self.size
        {
            self.full = true;
            return None;
        }

        let at = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);
        Some(at)
    }

    pub(super) fn is_full(&self) -> bool {
        self.full
    }
}

/// R8 coverage texture plus a cache of the glyphs already uploaded into it.
pub(super) struct GlyphAtlas {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    packer: ShelfPacker,
    regions: HashMap<GlyphRasterConfig, AtlasRegion>,
}

impl GlyphAtlas {
    pub(super) fn new(ctx: &RenderCtx<'_>) -> Self {
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("vellum glyph atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            packer: ShelfPacker::new(ATLAS_SIZE, GLYPH_PADDING),
            regions: HashMap::new(),
        }
    }

    pub(super) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Region for `key`, rasterizing and uploading it on first use.
    ///
    /// `None` for empty glyphs and once the atlas is full.
    pub(super) fn region(
        &mut self,
        ctx: &RenderCtx<'_>,
        font: &fontdue::Font,
        key: GlyphRasterConfig,
    ) -> Option<AtlasRegion> {
        if let Some(region) = self.regions.get(&key) {
            return Some(*region);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        let (w, h) = (metrics.width as u32, metrics.height as u32);
        if w == 0 || h == 0 {
            return None;
        }

        let was_full = self.packer.is_full();
        let Some((x, y)) = self.packer.allocate(w, h) else {
            if !was_full {
                log::warn!(
                    "glyph atlas is full ({ATLAS_SIZE}x{ATLAS_SIZE}); some glyphs will not be rendered"
                );
            }
            return None;
        };

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x, y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let region = region_for(x, y, w, h);
        self.regions.insert(key, region);
        Some(region)
    }
}

fn region_for(x: u32, y: u32, w: u32, h: u32) -> AtlasRegion {
    let s = ATLAS_SIZE as f32;
    AtlasRegion {
        uv_min: [x as f32 / s, y as f32 / s],
        uv_max: [(x + w) as f32 / s, (y + h) as f32 / s],
    }
}
