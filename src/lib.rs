//! jetframe is a software framebuffer compositor with a minimal sprite game loop on top.
//!
//! # Pipeline overview
//!
//! 1. **Load**: image files decode once into straight-alpha BGRA8 [`ImageData`].
//! 2. **Compose**: each frame the [`Framebuffer`] is cleared, the background is drawn at the
//!    origin, and the sprite is blended on top with per-pixel clipping.
//! 3. **Present**: the framebuffer hands a borrowed [`FrameView`] to a [`Surface`]
//!    (memory, PNG file, or a native window with the `window` feature).
//!
//! [`FrameContext`] ties these together with keyboard movement and a score that advances on
//! queued ticks from a [`ScoreTicker`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single writer**: only the frame loop mutates the framebuffer; score ticks arrive as
//!   events drained between frames.
//! - **Opaque output**: every drawn pixel ends with alpha 255.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Presentation surfaces.
pub mod present;
/// Software compositing.
pub mod render;
/// Frame-loop context and collaborators.
pub mod session;

pub use crate::assets::decode::{decode_image, load_image};
pub use crate::assets::image_data::ImageData;
pub use crate::foundation::core::{BYTES_PER_PIXEL, Canvas, Color, Position};
pub use crate::foundation::error::{JetframeError, JetframeResult};

pub use crate::present::memory::{CapturedFrame, InMemorySurface};
pub use crate::present::png::PngSurface;
pub use crate::present::surface::Surface;
#[cfg(feature = "window")]
pub use crate::present::window::{WindowSurface, WindowSurfaceOpts};
pub use crate::render::framebuffer::Framebuffer;
pub use crate::render::view::FrameView;
pub use crate::session::config::GameConfig;
pub use crate::session::frame_loop::{
    ExitReason, FrameContext, LoopSummary, StepOutcome, run_loop,
};
pub use crate::session::input::{InputState, apply_movement};
pub use crate::session::ticker::{LoopEvent, ScoreTicker};
