use std::path::Path;

use crate::assets::image_data::{ImageData, swap_red_blue_in_place};
use crate::foundation::error::{JetframeError, JetframeResult};

/// Decode encoded image bytes (PNG, JPEG, BMP, GIF, ...) into straight-alpha BGRA8.
///
/// Sources without an alpha channel come out fully opaque.
pub fn decode_image(bytes: &[u8]) -> JetframeResult<ImageData> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| JetframeError::load(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut bgra8 = rgba.into_raw();
    swap_red_blue_in_place(&mut bgra8);

    ImageData::from_bgra8(width, height, bgra8)
}

/// Read and decode an image file.
///
/// Fails with [`JetframeError::Load`] when the file is missing, unreadable, or not a decodable
/// raster container. No partial image is ever returned.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<Path>) -> JetframeResult<ImageData> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| JetframeError::load(format!("read image '{}': {e}", path.display())))?;
    let img = decode_image(&bytes).map_err(|e| match e {
        JetframeError::Load(msg) => JetframeError::load(format!("'{}': {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(width = img.width(), height = img.height(), "image loaded");
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
