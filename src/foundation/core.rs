use crate::foundation::error::{JetframeError, JetframeResult};

/// Bytes per BGRA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Straight-alpha RGBA8 color.
///
/// Channels are stored in `(r, g, b, a)` order here; buffers store them as BGRA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// The color as a BGRA byte quadruple.
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Read a color back from a BGRA byte quadruple.
    pub const fn from_bgra(px: [u8; 4]) -> Self {
        Self::rgba(px[2], px[1], px[0], px[3])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Integer position in destination-buffer space (origin top-left, x right, y down).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Build a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a framebuffer or display surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated, non-empty canvas.
    pub fn new(width: u32, height: u32) -> JetframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(JetframeError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Byte length of a tightly packed BGRA buffer covering this canvas.
    pub fn byte_len(self) -> JetframeResult<usize> {
        bgra_len(self.width, self.height)
    }
}

/// Byte length of a tightly packed `width x height` BGRA buffer, checking for overflow.
pub(crate) fn bgra_len(width: u32, height: u32) -> JetframeResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| {
            JetframeError::validation(format!("pixel buffer size overflow for {width}x{height}"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
