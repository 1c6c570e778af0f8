//! Software compositing.

/// Fixed-size BGRA framebuffer with clear, blended draw, and present.
pub mod framebuffer;
/// Borrowed read-only frame views handed to surfaces.
pub mod view;
