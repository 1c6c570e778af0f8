use std::ops::Range;

use crate::assets::image_data::ImageData;
use crate::foundation::core::{BYTES_PER_PIXEL, Canvas, Color};
use crate::foundation::error::JetframeResult;
use crate::foundation::math::blend_channel;
use crate::present::surface::Surface;
use crate::render::view::FrameView;

/// Fixed-size software framebuffer in straight-alpha BGRA8.
///
/// The buffer is allocated once in [`Framebuffer::new`] and mutated in place by [`clear`] and
/// [`draw`]; its length is always `width * height * 4`.
///
/// [`clear`]: Framebuffer::clear
/// [`draw`]: Framebuffer::draw
#[derive(Clone, Debug)]
pub struct Framebuffer {
    canvas: Canvas,
    bgra8: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a zero-filled `width x height` framebuffer.
    pub fn new(width: u32, height: u32) -> JetframeResult<Self> {
        let canvas = Canvas::new(width, height)?;
        let len = canvas.byte_len()?;
        Ok(Self {
            canvas,
            bgra8: vec![0; len],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Framebuffer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Raw BGRA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.bgra8
    }

    /// Borrow the frame for presentation.
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            width: self.canvas.width,
            height: self.canvas.height,
            stride: self.canvas.width as usize * BYTES_PER_PIXEL,
            data: &self.bgra8,
        }
    }

    /// BGRA quadruple at `(x, y)`, or `None` when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = self.index(x as usize, y as usize);
        let px = &self.bgra8[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite every pixel with `color`. No blending; alpha is written as given.
    pub fn clear(&mut self, color: Color) {
        let px = color.to_bgra();
        for dst in self.bgra8.chunks_exact_mut(BYTES_PER_PIXEL) {
            dst.copy_from_slice(&px);
        }
    }

    /// Composite `image` with its top-left corner at `(x, y)`.
    ///
    /// Source pixels landing outside the framebuffer are skipped. Color channels use
    /// source-over blending against the current contents; destination alpha is forced to 255
    /// on every touched pixel.
    pub fn draw(&mut self, image: &ImageData, x: i32, y: i32) {
        let Some(cols) = clip_span(x, image.width(), self.canvas.width) else {
            return;
        };
        let Some(rows) = clip_span(y, image.height(), self.canvas.height) else {
            return;
        };

        let src_w = image.width() as usize;
        let src = image.pixels();
        let span = (cols.end - cols.start) * BYTES_PER_PIXEL;

        for sy in rows {
            let dy = (i64::from(y) + sy as i64) as usize;
            let dx = (i64::from(x) + cols.start as i64) as usize;

            let s0 = (sy * src_w + cols.start) * BYTES_PER_PIXEL;
            let d0 = self.index(dx, dy);
            let src_row = &src[s0..s0 + span];
            let dst_row = &mut self.bgra8[d0..d0 + span];

            for (d, s) in dst_row
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(src_row.chunks_exact(BYTES_PER_PIXEL))
            {
                let a = s[3];
                match a {
                    255 => d[..3].copy_from_slice(&s[..3]),
                    0 => {}
                    _ => {
                        d[0] = blend_channel(s[0], d[0], a);
                        d[1] = blend_channel(s[1], d[1], a);
                        d[2] = blend_channel(s[2], d[2], a);
                    }
                }
                d[3] = 255;
            }
        }
    }

    /// Hand the current frame to `surface`. The buffer is not modified.
    pub fn present(&self, surface: &mut dyn Surface) -> JetframeResult<()> {
        surface.present(self.view())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * self.canvas.width as usize + x) * BYTES_PER_PIXEL
    }
}

/// Source index range of an `extent`-long run placed at `origin` that lands in `[0, limit)`.
fn clip_span(origin: i32, extent: u32, limit: u32) -> Option<Range<usize>> {
    let origin = i64::from(origin);
    let start = (-origin).clamp(0, i64::from(extent));
    let end = (i64::from(limit) - origin).clamp(0, i64::from(extent));
    (start < end).then(|| start as usize..end as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/render/framebuffer.rs"]
mod tests;
