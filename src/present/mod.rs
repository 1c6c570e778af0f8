//! Presentation surfaces.
//!
//! A surface receives a borrowed BGRA frame once per `present` call and performs the
//! platform-specific copy. The compositor never holds platform handles itself.

/// In-memory surface for tests and headless runs.
pub mod memory;
/// PNG file surface.
pub mod png;
/// Surface trait.
pub mod surface;
/// Native window surface backed by `minifb`.
#[cfg(feature = "window")]
pub mod window;
