use std::path::{Path, PathBuf};

use crate::foundation::error::{JetframeError, JetframeResult};
use crate::present::surface::Surface;
use crate::render::view::FrameView;

/// Surface that writes each presented frame to a PNG file, overwriting the previous one.
#[derive(Clone, Debug)]
pub struct PngSurface {
    out_path: PathBuf,
    written: u64,
}

impl PngSurface {
    /// Write frames to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            written: 0,
        }
    }

    /// Output file path.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Number of frames written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl Surface for PngSurface {
    fn present(&mut self, frame: FrameView<'_>) -> JetframeResult<()> {
        ensure_parent_dir(&self.out_path)?;
        let rgba8 = frame.to_rgba8();
        image::save_buffer_with_format(
            &self.out_path,
            &rgba8,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            JetframeError::present(format!("write png '{}': {e}", self.out_path.display()))
        })?;
        self.written += 1;
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> JetframeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            JetframeError::present(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/present/png.rs"]
mod tests;
