use std::collections::VecDeque;

use crate::foundation::error::{JetframeError, JetframeResult};
use crate::present::surface::Surface;
use crate::render::view::FrameView;
use crate::session::input::InputState;

/// Owned copy of a presented frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed BGRA8 bytes.
    pub bgra8: Vec<u8>,
}

/// In-memory surface for tests and headless runs.
///
/// Keeps the most recent frame, replays a scripted input sequence (one entry per poll), and can
/// report itself closed after a fixed number of presents.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    presented: u64,
    last: Option<CapturedFrame>,
    caption: Option<String>,
    script: VecDeque<InputState>,
    open_frames: Option<u64>,
}

impl InMemorySurface {
    /// Create an empty surface that stays open forever and reports no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue input states returned by successive `poll_input` calls; idle once exhausted.
    pub fn with_input_script(mut self, script: impl IntoIterator<Item = InputState>) -> Self {
        self.script.extend(script);
        self
    }

    /// Report the surface closed after `frames` presents.
    pub fn with_open_frames(mut self, frames: u64) -> Self {
        self.open_frames = Some(frames);
        self
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// The most recent frame, if any.
    pub fn last_frame(&self) -> Option<&CapturedFrame> {
        self.last.as_ref()
    }

    /// The most recent caption, if any.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Surface for InMemorySurface {
    fn present(&mut self, frame: FrameView<'_>) -> JetframeResult<()> {
        let expected = frame.stride * frame.height as usize;
        if frame.data.len() < expected {
            return Err(JetframeError::present(format!(
                "frame {}x{} needs {expected} bytes, got {}",
                frame.width,
                frame.height,
                frame.data.len()
            )));
        }

        let row_bytes = frame.width as usize * 4;
        let mut bgra8 = Vec::with_capacity(row_bytes * frame.height as usize);
        for row in frame.data.chunks(frame.stride).take(frame.height as usize) {
            bgra8.extend_from_slice(&row[..row_bytes]);
        }

        self.last = Some(CapturedFrame {
            width: frame.width,
            height: frame.height,
            bgra8,
        });
        self.presented += 1;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open_frames.is_none_or(|n| self.presented < n)
    }

    fn poll_input(&mut self) -> InputState {
        self.script.pop_front().unwrap_or_default()
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_string());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/memory.rs"]
mod tests;
