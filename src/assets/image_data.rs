use std::sync::Arc;

use crate::foundation::core::{BYTES_PER_PIXEL, Color, bgra_len};
use crate::foundation::error::{JetframeError, JetframeResult};

/// Decoded raster image in straight-alpha BGRA8.
///
/// Immutable once built. Cloning shares the pixel bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    /// Row-major, top-to-bottom, tightly packed BGRA8.
    bgra8: Arc<Vec<u8>>,
}

impl ImageData {
    /// Wrap BGRA8 bytes. The length must be exactly `width * height * 4`.
    pub fn from_bgra8(width: u32, height: u32, bgra8: Vec<u8>) -> JetframeResult<Self> {
        let expected = bgra_len(width, height)?;
        if bgra8.len() != expected {
            return Err(JetframeError::validation(format!(
                "image {width}x{height} expects {expected} bgra bytes, got {}",
                bgra8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bgra8: Arc::new(bgra8),
        })
    }

    /// Build from RGBA8 bytes, swapping red and blue in place.
    pub fn from_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> JetframeResult<Self> {
        swap_red_blue_in_place(&mut rgba8);
        Self::from_bgra8(width, height, rgba8)
    }

    /// A `width x height` image filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> JetframeResult<Self> {
        let len = bgra_len(width, height)?;
        let px = color.to_bgra();
        let bgra8 = px.iter().copied().cycle().take(len).collect();
        Self::from_bgra8(width, height, bgra8)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw BGRA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.bgra8
    }

    /// BGRA quadruple at `(x, y)`, or `None` when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.bgra8[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Swap channel 0 and 2 of every 4-byte pixel (RGBA <-> BGRA).
pub(crate) fn swap_red_blue_in_place(px: &mut [u8]) {
    for p in px.chunks_exact_mut(BYTES_PER_PIXEL) {
        p.swap(0, 2);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image_data.rs"]
mod tests;
