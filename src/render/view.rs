use crate::foundation::core::BYTES_PER_PIXEL;

/// Read-only borrow of a BGRA8 frame.
///
/// This is the only thing a [`crate::Surface`] ever sees of the compositor.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Bytes per row. Always `width * 4` for compositor frames.
    pub stride: usize,
    /// BGRA8 bytes, row-major, top-to-bottom.
    pub data: &'a [u8],
}

impl FrameView<'_> {
    /// Copy the frame into RGBA8 byte order (for encoders such as PNG).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let mut out = Vec::with_capacity(row_bytes * self.height as usize);
        for row in self.data.chunks(self.stride).take(self.height as usize) {
            for px in row[..row_bytes].chunks_exact(BYTES_PER_PIXEL) {
                out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
            }
        }
        out
    }

    /// Pack the frame into `0RGB` words (the layout native window blitters expect).
    pub fn to_0rgb_u32(&self) -> Vec<u32> {
        let mut out = Vec::new();
        self.write_0rgb_u32(&mut out);
        out
    }

    /// Like [`FrameView::to_0rgb_u32`] but reuses `out`'s allocation.
    pub fn write_0rgb_u32(&self, out: &mut Vec<u32>) {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        out.clear();
        out.reserve(self.width as usize * self.height as usize);
        for row in self.data.chunks(self.stride).take(self.height as usize) {
            out.extend(row[..row_bytes].chunks_exact(BYTES_PER_PIXEL).map(|px| {
                (u32::from(px[2]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[0])
            }));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/view.rs"]
mod tests;
